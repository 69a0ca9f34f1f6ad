use dioxus::prelude::*;

/// Minimum length of a usable task description, after trimming
pub const MIN_DESCRIPTION_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("Please describe your task in more detail (at least {MIN_DESCRIPTION_LEN} characters).")]
    TooShort,
}

/// Validate a raw task description. Returns the trimmed description on
/// success; anything under the minimum length is rejected before a
/// request is issued.
pub fn validate_description(input: &str) -> Result<String, IntakeError> {
    let trimmed = input.trim();
    if trimmed.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(IntakeError::TooShort);
    }
    Ok(trimmed.to_string())
}

#[derive(PartialEq, Props, Clone)]
pub struct TaskIntakeProps {
    pub submitting: bool,
    pub on_submit: EventHandler<String>,
}

/// Task description form. Valid submissions are handed to the parent,
/// which owns the actual task-create request.
#[component]
pub fn TaskIntake(props: TaskIntakeProps) -> Element {
    let mut description = use_signal(String::new);
    let mut warning = use_signal(|| None::<String>);

    let mut submit = move |_| {
        match validate_description(&description.read()) {
            Ok(valid) => {
                warning.set(None);
                props.on_submit.call(valid);
            }
            Err(e) => {
                warning.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div { class: "panel task-intake",
            h2 { class: "panel-title", "Describe your task" }
            p { class: "panel-text",
                "State your task, get the best free AI tools, and open sessions right here."
            }
            textarea {
                class: "task-input",
                placeholder: "e.g., Write a 500-word blog on AI in healthcare",
                rows: "5",
                value: "{description}",
                disabled: props.submitting,
                oninput: move |evt| description.set(evt.value().clone()),
            }
            if let Some(text) = warning.read().as_ref() {
                div { class: "intake-warning", "{text}" }
            }
            div { class: "intake-actions",
                button {
                    class: "action-button start",
                    disabled: props.submitting,
                    onclick: move |_| submit(()),
                    if props.submitting {
                        "Submitting..."
                    } else {
                        "Get recommendations"
                    }
                }
                span { class: "intake-hint",
                    "AI Explorer will suggest the best free tools and open them here."
                }
            }
        }
    }
}
