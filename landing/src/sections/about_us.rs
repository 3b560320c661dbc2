use dnavault_core::Section;
use leptos::prelude::*;

#[component]
pub fn AboutUs() -> impl IntoView {
    view! {
        <section class="about-us" id=Section::AboutUs.anchor()>
            <h2>"About Us"</h2>
            <div class="team-cards">
                <TeamCard
                    name="Ishaan Jain"
                    photo="/ishaan.jpg"
                    alt="Ishaan"
                    profile="https://www.linkedin.com/in/ishaan-jain-07a782299/"
                    bio="I'm Ishaan Jain, a computer science student passionate about AI, cybersecurity, and full-stack development. I enjoy building innovative solutions that blend intelligent systems with practical design, and I'm always exploring new ways to solve real-world problems through tech."
                />
                <TeamCard
                    name="Aditya Sunke"
                    photo="/aditya.jpeg"
                    alt="Aditya"
                    profile="https://www.linkedin.com/in/aditya-sunke/"
                    bio="Hi I'm Aditya! I'm a Computer Science Major with a minor in Quantum Information Science and Engineering. I have experience in Java, Python and C. I also have experience with post-quantum cryptographic protocols, quantum algorithms and quantum frameworks. I am passionate about quantum technologies and their potential the solve complex world-problems."
                />
                <TeamCard
                    name="Sankalp Dasari"
                    photo="/sankalp.jpeg"
                    alt="Sankalp"
                    profile="https://www.linkedin.com/in/lehar-sai-sankalp-dasari-188517288/"
                    bio="Hi, I’m Sankalp Dasari, a Computer Science major with a minor in Cybersecurity. I have experience working with Java, Python, and C, and I’ve developed projects in AI/ML, Full Stack Development, Cryptography, Computer Vision, and Real-Time Image Tracking. I’m passionate about building intelligent systems and applying AI to solve real-world problems that make a meaningful impact."
                />
            </div>
        </section>
    }
}

/// Whole card is a link to the member's profile.
#[component]
fn TeamCard(
    name: &'static str,
    photo: &'static str,
    alt: &'static str,
    profile: &'static str,
    bio: &'static str,
) -> impl IntoView {
    view! {
        <a href=profile target="_blank" rel="noopener noreferrer" class="card block">
            <img src=photo alt=alt />
            <h3>{name}</h3>
            <p>{bio}</p>
        </a>
    }
}
