use dioxus::prelude::*;
use services::{RESULTS_LINK_LABEL, StatusMessage};

#[component]
pub fn StatusLine(
    #[props(!optional)] status: Option<StatusMessage>,
    on_open_results: EventHandler<String>,
) -> Element {
    let Some(status) = status else {
        return rsx! { p { id: "statusText", class: "status" } };
    };
    let class = if status.is_error() {
        "status status-error"
    } else {
        "status"
    };
    let text = status.text();
    let results_url = status.results_url().map(str::to_string);

    rsx! {
        p { id: "statusText", class,
            "{text}"
            if let Some(url) = results_url {
                " "
                a {
                    href: "{url}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_open_results.call(url.clone());
                    },
                    "{RESULTS_LINK_LABEL}"
                }
            }
        }
    }
}

#[component]
pub fn ProgressBar(percent: u8) -> Element {
    rsx! {
        div { class: "progress-bar",
            div {
                id: "progress-bar-fill",
                class: "progress-bar-fill",
                style: "width: {percent}%",
            }
        }
    }
}
