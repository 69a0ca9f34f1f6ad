use dioxus::prelude::*;
use chrono::{DateTime, Local};
use dotenv::dotenv;
use tracing::{error, info, warn, Level};

use ai_explorer_desk::api::{
    ExplorerApi, Recommendation, SessionCreateRequest, SessionDetail, SessionSummary, ToolInfo,
    TranscriptMessage,
};
use ai_explorer_desk::components::{RecommendationsPanel, SessionsPanel, TaskIntake};
use ai_explorer_desk::config::Settings;
use ai_explorer_desk::{logging, ExplorerState};

// Load environment variables from .env file if it exists
fn load_env() {
    match dotenv() {
        Ok(_) => eprintln!("Loaded environment from .env file"),
        Err(_) => eprintln!("No .env file found, using default environment"),
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Explorer {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables
    load_env();

    // Console-only logging in debug builds, console + rolling file in release
    let log_result = if cfg!(debug_assertions) {
        logging::init_simple(Level::DEBUG)
    } else {
        logging::init()
    };
    if let Err(e) = log_result {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Launch the app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Main explorer page: task intake, recommendations, sessions
#[component]
fn Explorer() -> Element {
    let settings = use_signal(Settings::from_env);
    let api = use_signal(|| {
        let s = settings.peek().clone();
        ExplorerApi::new(s.api_base, s.api_token)
            .expect("Failed to construct HTTP client")
    });

    let mut state = use_signal(ExplorerState::default);
    let mut error_message = use_signal(|| None::<String>);
    let mut active_section = use_signal(|| "task");

    let mut health_status = use_signal(|| "Not checked".to_string());
    let mut health_checked_at = use_signal(|| None::<DateTime<Local>>);

    let mut recommendations = use_signal(Vec::<Recommendation>::new);
    let mut sessions_list = use_signal(Vec::<SessionSummary>::new);
    let mut session_detail = use_signal(|| None::<SessionDetail>);
    let mut transcript = use_signal(Vec::<TranscriptMessage>::new);

    let mut submitting = use_signal(|| false);
    let mut sending = use_signal(|| false);

    // Probe the API and update the sidebar status card
    let mut check_health = move |_| {
        health_status.set("Checking...".to_string());

        let api_client = api.read().clone();
        spawn({
            to_owned![health_status, health_checked_at];
            async move {
                match api_client.health().await {
                    Ok(_) => {
                        health_status.set("API reachable".to_string());
                    }
                    Err(e) => {
                        warn!("Health check failed: {}", e);
                        health_status.set("API unreachable".to_string());
                    }
                }
                health_checked_at.set(Some(Local::now()));
            }
        });
    };

    // Check reachability once on startup
    use_effect(move || {
        check_health(());
    });

    // Fetch recommendations for the current task
    let mut load_recommendations = move |_| {
        let Some(task_id) = state.read().task_id.clone() else {
            error_message.set(Some("Enter a task first to see recommendations".to_string()));
            return;
        };

        error_message.set(None);

        let api_client = api.read().clone();
        spawn({
            to_owned![recommendations, error_message];
            async move {
                match api_client.recommendations(&task_id).await {
                    Ok(recs) => {
                        info!("Loaded {} recommendations for task {}", recs.len(), task_id);
                        recommendations.set(recs);
                    }
                    Err(e) => {
                        error!("Failed to load recommendations: {}", e);
                        error_message.set(Some(format!("Failed to load recommendations: {}", e)));
                    }
                }
            }
        });
    };

    // Fetch one session's detail and decode its transcript
    let mut open_session = move |session_id: String| {
        error_message.set(None);
        state.write().session_opened(session_id.clone());

        let api_client = api.read().clone();
        spawn({
            to_owned![session_detail, transcript, error_message];
            async move {
                match api_client.session(&session_id).await {
                    Ok(detail) => {
                        match detail.parse_transcript() {
                            Ok(messages) => transcript.set(messages),
                            Err(e) => {
                                error!("Transcript decode failed for {}: {}", session_id, e);
                                error_message.set(Some(format!("{}", e)));
                                transcript.set(Vec::new());
                            }
                        }
                        session_detail.set(Some(detail));
                    }
                    Err(e) => {
                        error!("Failed to load session {}: {}", session_id, e);
                        error_message.set(Some(format!("Failed to load session: {}", e)));
                    }
                }
            }
        });
    };

    // Fetch the session list for the current task and open one:
    // the active session when there is one, otherwise the first
    let mut load_sessions = move |_| {
        let Some(task_id) = state.read().task_id.clone() else {
            error_message.set(Some("Create a task first to view sessions".to_string()));
            return;
        };

        error_message.set(None);

        let api_client = api.read().clone();
        spawn({
            to_owned![sessions_list, error_message, state];
            async move {
                match api_client.task_sessions(&task_id).await {
                    Ok(sessions) => {
                        let chosen = state
                            .read()
                            .active_session
                            .clone()
                            .filter(|id| sessions.iter().any(|s| &s.id == id))
                            .or_else(|| sessions.first().map(|s| s.id.clone()));
                        sessions_list.set(sessions);

                        if let Some(id) = chosen {
                            open_session(id);
                        }
                    }
                    Err(e) => {
                        error!("Failed to list sessions: {}", e);
                        error_message.set(Some(format!("Failed to list sessions: {}", e)));
                    }
                }
            }
        });
    };

    // Create the task and move straight to its recommendations
    let mut submit_task = move |description: String| {
        if *submitting.read() {
            return;
        }
        submitting.set(true);
        error_message.set(None);

        let api_client = api.read().clone();
        spawn({
            to_owned![state, submitting, active_section, error_message];
            async move {
                match api_client.create_task(&description).await {
                    Ok(created) => {
                        info!("Created task {}", created.task_id);
                        state.write().task_created(created.task_id, description);
                        sessions_list.set(Vec::new());
                        session_detail.set(None);
                        transcript.set(Vec::new());
                        active_section.set("recommendations");
                        load_recommendations(());
                    }
                    Err(e) => {
                        error!("Failed to create task: {}", e);
                        error_message.set(Some(format!("Failed to create task: {}", e)));
                    }
                }
                submitting.set(false);
            }
        });
    };

    // Open a session against the selected tool
    let mut select_tool = move |tool: ToolInfo| {
        let Some(task_id) = state.read().task_id.clone() else {
            error_message.set(Some("Enter a task first to see recommendations".to_string()));
            return;
        };

        error_message.set(None);
        let request = SessionCreateRequest::new(task_id, tool.id.clone());

        let api_client = api.read().clone();
        spawn({
            to_owned![state, active_section, error_message];
            async move {
                match api_client.create_session(&request).await {
                    Ok(created) => {
                        info!("Opened session {} with tool {}", created.session_id, tool.id);
                        state.write().session_opened(created.session_id);
                        active_section.set("sessions");
                        load_sessions(());
                    }
                    Err(e) => {
                        error!("Failed to create session: {}", e);
                        error_message.set(Some(format!("Failed to create session: {}", e)));
                    }
                }
            }
        });
    };

    // Append a user message to the active session, then refetch the
    // detail so the transcript shows what the server actually stored
    let mut send_message = move |content: String| {
        let Some(session_id) = state.read().active_session.clone() else {
            return;
        };
        if *sending.read() {
            return;
        }
        sending.set(true);
        error_message.set(None);

        let api_client = api.read().clone();
        spawn({
            to_owned![sending, error_message];
            async move {
                let message = TranscriptMessage::user(content);
                match api_client.post_message(&session_id, &message).await {
                    Ok(()) => {
                        open_session(session_id);
                    }
                    Err(e) => {
                        error!("Failed to send message: {}", e);
                        error_message.set(Some(format!("Failed to send message: {}", e)));
                    }
                }
                sending.set(false);
            }
        });
    };

    // Set active section
    let set_section = move |section: &'static str| {
        move |_| {
            active_section.set(section);
            if section == "recommendations" {
                load_recommendations(());
            } else if section == "sessions" {
                load_sessions(());
            }
        }
    };

    rsx! {
        div { class: "app-wrapper",
            // Sidebar
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    svg {
                        class: "app-logo",
                        width: "32",
                        height: "32",
                        view_box: "0 0 24 24",
                        fill: "none",
                        xmlns: "http://www.w3.org/2000/svg",
                        path {
                            d: "M10 4H14C18.4183 4 22 7.58172 22 12C22 16.4183 18.4183 20 14 20H4V12C4 7.58172 7.58172 4 12 4",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round"
                        }
                    }
                    div { class: "app-title", "AI Explorer" }
                }

                div { class: "sidebar-section",
                    div { class: "section-header", "Navigation" }

                    button {
                        class: if *active_section.read() == "task" { "nav-item active" } else { "nav-item" },
                        onclick: set_section("task"),
                        svg {
                            class: "nav-icon",
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
                                d: "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"
                            }
                            path {
                                d: "M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"
                            }
                        }
                        span { "Task" }
                    }

                    button {
                        class: if *active_section.read() == "recommendations" { "nav-item active" } else { "nav-item" },
                        onclick: set_section("recommendations"),
                        disabled: !state.read().has_task(),
                        svg {
                            class: "nav-icon",
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
                        span { "Recommendations" }
                    }

                    button {
                        class: if *active_section.read() == "sessions" { "nav-item active" } else { "nav-item" },
                        onclick: set_section("sessions"),
                        disabled: !state.read().has_task(),
                        svg {
                            class: "nav-icon",
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
                                d: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"
                            }
                        }
                        span { "Sessions" }
                    }
                }

                div { class: "sidebar-section",
                    div { class: "section-header", "API Status" }

                    div { class: "status-card",
                        div {
                            class: {
                                match health_status.read().as_str() {
                                    "API reachable" => "status-dot online",
                                    "API unreachable" => "status-dot error",
                                    _ => "status-dot offline"
                                }
                            }
                        }
                        div { class: "status-info",
                            div { class: "status-label", "Status" }
                            div { class: "status-value", "{health_status}" }
                            if let Some(checked_at) = health_checked_at.read().as_ref() {
                                div { class: "status-checked", "checked ", {checked_at.format("%H:%M:%S").to_string()} }
                            }
                        }
                    }

                    div { class: "api-base-card",
                        div { class: "status-label", "API_BASE" }
                        code { class: "api-base-value", "{settings.read().api_base}" }
                    }

                    button {
                        class: "action-button start",
                        disabled: health_status.read().as_str() == "Checking...",
                        onclick: move |_| check_health(()),
                        "Check API"
                    }
                }

                // Version info
                div { class: "sidebar-footer",
                    div { class: "version-info", "AI Explorer v0.1.0" }
                }
            }

            // Main content
            main { class: "main-content",
                if let Some(ref error) = *error_message.read() {
                    div { class: "error-alert",
                        svg {
                            class: "error-icon",
                            xmlns: "http://www.w3.org/2000/svg",
                            width: "20",
                            height: "20",
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
                                y1: "8",
                                x2: "12",
                                y2: "12"
                            }
                            line {
                                x1: "12",
                                y1: "16",
                                x2: "12",
                                y2: "16"
                            }
                        }
                        div { class: "error-content",
                            div { class: "error-title", "Error" }
                            div { class: "error-message", "{error}" }
                        }
                    }
                }

                // Task intake section
                div { class: if *active_section.read() == "task" { "content-section active" } else { "content-section" },
                    div { class: "welcome-header",
                        h1 { class: "welcome-title", "AI Explorer" }
                        p { class: "welcome-subtitle", "State your task, get the best free AI tools, open sessions here" }
                    }

                    TaskIntake {
                        submitting: *submitting.read(),
                        on_submit: move |description: String| submit_task(description),
                    }

                    if let Some(desc) = state.read().last_task_desc.as_ref() {
                        div { class: "panel last-task",
                            div { class: "status-label", "Current task" }
                            p { class: "panel-text", "{desc}" }
                        }
                    }
                }

                // Recommendations section
                div { class: if *active_section.read() == "recommendations" { "content-section active" } else { "content-section" },
                    div { class: "section-header",
                        h1 { class: "section-title", "Recommendations" }
                        if let Some(task_id) = state.read().task_id.as_ref() {
                            p { class: "section-description", "Task ID: {task_id}" }
                        } else {
                            p { class: "section-description", "Enter a task to see recommendations" }
                        }
                    }

                    RecommendationsPanel {
                        recommendations: recommendations.read().clone(),
                        on_select: move |tool: ToolInfo| select_tool(tool),
                        on_reload: move |_| load_recommendations(()),
                    }
                }

                // Sessions section
                div { class: if *active_section.read() == "sessions" { "content-section active" } else { "content-section" },
                    div { class: "section-header",
                        h1 { class: "section-title", "Sessions" }
                        p { class: "section-description", "Continue working with the tools you selected" }
                    }

                    SessionsPanel {
                        sessions: sessions_list.read().clone(),
                        active_session: state.read().active_session.clone(),
                        detail: session_detail.read().clone(),
                        transcript: transcript.read().clone(),
                        sending: *sending.read(),
                        on_open: move |id: String| open_session(id),
                        on_send: move |content: String| send_message(content),
                    }
                }
            }
        }
    }
}
