use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::TestView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TestView)] Test {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "app",
            h1 { "Pupil light reflex test" }
            Outlet::<Route> {}
        }
    }
}
