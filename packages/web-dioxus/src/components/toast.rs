//! Notification toast stack

use dioxus::prelude::*;

use crate::state::{use_toasts, Toast};

/// Floating toast stack, bottom-right
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let current: Vec<Toast> = toasts.toasts.read().clone();

    rsx! {
        div {
            class: "fixed bottom-6 right-6 flex flex-col gap-2 z-50",
            for toast in current {
                ToastCard {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: move |id| toasts.dismiss(id)
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ToastCardProps {
    toast: Toast,
    on_dismiss: EventHandler<u64>,
}

#[component]
fn ToastCard(props: ToastCardProps) -> Element {
    let id = props.toast.id;

    // Auto-dismiss after a few seconds in the browser
    #[cfg(feature = "web")]
    {
        let on_dismiss = props.on_dismiss;
        use_effect(move || {
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(4_000).await;
                on_dismiss.call(id);
            });
        });
    }

    rsx! {
        div {
            class: "bg-white border border-gray-200 rounded-lg shadow-lg px-4 py-3 w-80 flex items-start gap-3",
            div {
                class: "flex-1",
                p { class: "text-sm font-semibold text-gray-900", "{props.toast.title}" }
                p { class: "text-sm text-gray-600", "{props.toast.description}" }
            }
            button {
                class: "text-gray-400 hover:text-gray-600",
                onclick: move |_| props.on_dismiss.call(id),
                "\u{2715}"
            }
        }
    }
}
