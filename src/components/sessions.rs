use dioxus::prelude::*;
use crate::api::{SessionDetail, SessionSummary, TranscriptMessage};
use crate::components::message::MessageView;
use crate::components::recommendations::embed_hint;

#[derive(PartialEq, Props, Clone)]
pub struct SessionsPanelProps {
    pub sessions: Vec<SessionSummary>,
    pub active_session: Option<String>,
    pub detail: Option<SessionDetail>,
    pub transcript: Vec<TranscriptMessage>,
    pub sending: bool,
    pub on_open: EventHandler<String>,
    pub on_send: EventHandler<String>,
}

/// Session browser: a picker over the task's sessions, the parsed
/// transcript with a compose form, and the agent window for the
/// session's tool (embedded or external per its embedding policy).
#[component]
pub fn SessionsPanel(props: SessionsPanelProps) -> Element {
    let mut compose = use_signal(String::new);

    let mut send = {
        let on_send = props.on_send;
        let sending = props.sending;
        move |_| {
            let text = compose.read().trim().to_string();
            if text.is_empty() || sending {
                return;
            }
            compose.set("".to_string());
            on_send.call(text);
        }
    };

    let mut send_ref = send.clone();
    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key().to_string() == "Enter" && !evt.modifiers().shift() {
            evt.prevent_default();
            send_ref(());
        }
    };

    if props.sessions.is_empty() {
        return rsx! {
            div { class: "empty-state",
                div { class: "empty-title", "No Sessions Yet" }
                div { class: "empty-message", "Go to Recommendations to select a tool." }
            }
        };
    }

    rsx! {
        div { class: "sessions-container",
            // Session picker
            div { class: "session-selector",
                h3 { class: "selector-title", "Open session" }
                select {
                    class: "session-dropdown",
                    value: props.active_session.clone().unwrap_or_default(),
                    onchange: move |evt| props.on_open.call(evt.value().clone()),
                    for session in props.sessions.iter() {
                        option {
                            value: "{session.id}",
                            selected: props.active_session.as_deref() == Some(session.id.as_str()),
                            "{session.title}"
                        }
                    }
                }
            }

            if let Some(detail) = props.detail.as_ref() {
                div { class: "session-panes",
                    // Transcript pane
                    div { class: "transcript-pane",
                        h3 { class: "pane-title", "Transcript" }
                        div { class: "chat-messages",
                            if props.transcript.is_empty() {
                                div { class: "empty-chat",
                                    div { class: "empty-chat-title", "No messages yet" }
                                    div { class: "empty-chat-subtitle",
                                        "Send the first message to this agent below"
                                    }
                                }
                            } else {
                                for (idx, message) in props.transcript.iter().enumerate() {
                                    MessageView {
                                        key: "msg-{idx}",
                                        message: message.clone(),
                                    }
                                }
                            }
                        }
                        div { class: "chat-input-container",
                            textarea {
                                class: "chat-input",
                                placeholder: "Message to this agent...",
                                value: "{compose}",
                                disabled: props.sending,
                                oninput: move |evt| compose.set(evt.value().clone()),
                                onkeydown: handle_keydown,
                            }
                            button {
                                class: "chat-send-button",
                                disabled: props.sending || compose.read().trim().is_empty(),
                                onclick: move |_| send(()),
                                svg {
                                    xmlns: "http://www.w3.org/2000/svg",
                                    width: "20",
                                    height: "20",
                                    view_box: "0 0 24 24",
                                    fill: "none",
                                    stroke: "currentColor",
                                    stroke_width: "2",
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    line {
                                        x1: "22",
                                        y1: "2",
                                        x2: "11",
                                        y2: "13",
                                    }
                                    polygon { points: "22 2 15 22 11 13 2 9 22 2" }
                                }
                            }
                        }
                    }

                    // Agent window pane
                    div { class: "agent-pane",
                        h3 { class: "pane-title", "Agent Window" }
                        if detail.tool.supports_embed {
                            iframe {
                                class: "agent-frame",
                                src: "{detail.tool.site_url}",
                                height: "520",
                            }
                        } else {
                            div { class: "external-tool",
                                p { class: "external-note",
                                    "This tool opens externally due to embedding policy."
                                }
                                div { class: "tool-embed-hint", {embed_hint(&detail.tool)} }
                                a {
                                    class: "action-button start",
                                    href: "{detail.tool.site_url}",
                                    target: "_blank",
                                    "Open {detail.tool.name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
