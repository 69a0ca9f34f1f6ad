use dioxus::prelude::*;
use crate::api::{Recommendation, ToolInfo};

/// Caption shown on each card for the tool's embedding policy
pub fn embed_hint(tool: &ToolInfo) -> &'static str {
    if tool.supports_embed {
        "Embeds here"
    } else {
        "Opens externally"
    }
}

#[derive(PartialEq, Props, Clone)]
pub struct RecommendationsPanelProps {
    pub recommendations: Vec<Recommendation>,
    pub on_select: EventHandler<ToolInfo>,
    pub on_reload: EventHandler<()>,
}

/// Card grid for the tools the API recommends for the current task
#[component]
pub fn RecommendationsPanel(props: RecommendationsPanelProps) -> Element {
    rsx! {
        div { class: "recommendations-container",
            if props.recommendations.is_empty() {
                div { class: "empty-state",
                    svg {
                        class: "empty-icon",
                        xmlns: "http://www.w3.org/2000/svg",
                        width: "48",
                        height: "48",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "1",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path {
                            d: "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"
                        }
                    }
                    div { class: "empty-title", "No Recommendations Yet" }
                    div { class: "empty-message", "The API returned no tools for this task. Try seeding tools in the API." }
                    button {
                        class: "reload-button",
                        onclick: move |_| props.on_reload.call(()),
                        svg {
                            class: "button-icon",
                            xmlns: "http://www.w3.org/2000/svg",
                            width: "16",
                            height: "16",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            path {
                                d: "M23 4v6h-6"
                            }
                            path {
                                d: "M1 20v-6h6"
                            }
                            path {
                                d: "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"
                            }
                        }
                        "Reload Recommendations"
                    }
                }
            } else {
                div { class: "recommendation-grid",
                    for rec in props.recommendations.iter() {
                        div {
                            key: "rec-{rec.tool.id}",
                            class: "recommendation-card",
                            div { class: "tool-header",
                                div { class: "tool-icon",
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
                                        path {
                                            d: "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"
                                        }
                                    }
                                }
                                h3 { class: "tool-name", "{rec.tool.name}" }
                                span { class: "tool-category", "{rec.tool.category}" }
                            }
                            p { class: "tool-rationale", "{rec.rationale}" }
                            div { class: "tool-embed-hint", {embed_hint(&rec.tool)} }
                            button {
                                class: "action-button start",
                                onclick: {
                                    let tool = rec.tool.clone();
                                    move |_| props.on_select.call(tool.clone())
                                },
                                "Select & Open: {rec.tool.name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
