use dioxus::prelude::*;
use crate::api::TranscriptMessage;

/// Map a wire role onto the style classes the transcript uses.
/// Unknown roles render like assistant messages.
pub fn role_class(role: &str) -> &'static str {
    match role {
        "user" => "user-message",
        "system" => "system-message",
        _ => "assistant-message",
    }
}

/// Display name for a wire role
pub fn role_label(role: &str) -> &'static str {
    match role {
        "user" => "You",
        "system" => "System",
        _ => "Agent",
    }
}

#[component]
pub fn MessageView(message: TranscriptMessage) -> Element {
    let class = role_class(&message.role);

    let avatar_icon = match message.role.as_str() {
        "user" => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle {
                    cx: "12",
                    cy: "8",
                    r: "5"
                }
                path {
                    d: "M20 21a8 8 0 1 0-16 0"
                }
            }
        },
        "system" => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle {
                    cx: "12",
                    cy: "12",
                    r: "10"
                }
                line {
                    x1: "12",
                    x2: "12",
                    y1: "8",
                    y2: "16"
                }
                line {
                    x1: "8",
                    x2: "16",
                    y1: "12",
                    y2: "12"
                }
            }
        },
        _ => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect {
                    width: "18",
                    height: "11",
                    x: "3",
                    y: "11",
                    rx: "2",
                    ry: "2"
                }
                path {
                    d: "M7 11V7a5 5 0 0 1 10 0v4"
                }
            }
        },
    };

    rsx! {
        div {
            class: "message {class}",
            div {
                class: "message-avatar",
                div {
                    class: "avatar-icon {class}-avatar",
                    {avatar_icon}
                }
            }
            div {
                class: "message-content",
                div {
                    class: "message-header",
                    div {
                        class: "message-sender",
                        {role_label(&message.role)}
                    }
                }
                div {
                    class: "message-text",
                    // Split by newlines and render paragraphs
                    {message.content.split("\n\n").map(|paragraph| {
                        if !paragraph.trim().is_empty() {
                            rsx! {
                                p {
                                    class: "message-paragraph",
                                    "{paragraph}"
                                }
                            }
                        } else {
                            rsx! {}
                        }
                    })}
                }
            }
        }
    }
}
