// Landing page sections
// Developed by the DNAVault Team (c)2025

/// Project name shown in the footer and logs
pub const PROJECT_NAME: &str = "DNAVault";

/// Source repository (single source of truth for every "code" link)
pub const REPO_URL: &str = "https://github.com/Sankalp-dasari/DNAVault";

/// Looping hero background video
pub const HERO_VIDEO: &str = "/video.mp4";

/// Poster frame shown until the video can play
pub const HERO_POSTER: &str = "/fallback.jpg";

/// Hamburger icon for the nav dropdown
pub const MENU_ICON: &str = "/menu.png";

mod about_us;
mod footer;
mod hero;
mod how_we_did_it;
mod nav;
mod objectives;

pub use about_us::AboutUs;
pub use footer::Footer;
pub use hero::Hero;
pub use how_we_did_it::HowWeDidIt;
pub use nav::Nav;
pub use objectives::Objectives;
