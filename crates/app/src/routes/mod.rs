pub mod dashboard;
pub mod not_found;
pub mod profile;

use dioxus::prelude::*;

use dashboard::Dashboard;
use not_found::NotFound;
use profile::{Profile, ProfileEdit};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/profile")]
    Profile {},
    #[route("/profile/edit")]
    ProfileEdit {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
