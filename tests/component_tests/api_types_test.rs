#[cfg(test)]
mod tests {
    use ai_explorer_desk::api::{
        error_detail, ApiError, ExplorerApi, Recommendation, SessionCreateRequest,
        SessionDetail, ToolInfo, TranscriptMessage,
    };
    use ai_explorer_desk::components::recommendations::embed_hint;
    use serde_json::json;

    fn sample_tool(supports_embed: bool) -> ToolInfo {
        ToolInfo {
            id: "tool-1".to_string(),
            name: "Writer".to_string(),
            category: "writing".to_string(),
            supports_embed,
            site_url: "https://writer.example".to_string(),
        }
    }

    #[test]
    fn test_session_create_request_wire_format() {
        // Selecting a tool must always pair the task id with the tool id
        let request = SessionCreateRequest::new("task-42", "tool-7");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value, json!({ "taskId": "task-42", "toolId": "tool-7" }));
    }

    #[test]
    fn test_tool_info_deserializes_camel_case() {
        let tool: ToolInfo = serde_json::from_value(json!({
            "id": "tool-1",
            "name": "Writer",
            "category": "writing",
            "supportsEmbed": true,
            "siteUrl": "https://writer.example"
        }))
        .unwrap();

        assert!(tool.supports_embed);
        assert_eq!(tool.site_url, "https://writer.example");
    }

    #[test]
    fn test_recommendation_deserializes() {
        let rec: Recommendation = serde_json::from_value(json!({
            "tool": {
                "id": "tool-1",
                "name": "Writer",
                "category": "writing",
                "supportsEmbed": false,
                "siteUrl": "https://writer.example"
            },
            "rationale": "Best fit for long-form writing"
        }))
        .unwrap();

        assert_eq!(rec.tool.name, "Writer");
        assert_eq!(rec.rationale, "Best fit for long-form writing");
    }

    #[test]
    fn test_transcript_parses_roles_and_content() {
        let detail = SessionDetail {
            id: "session-1".to_string(),
            title: "Writer session".to_string(),
            transcript: r#"[
                {"role": "user", "content": "Hello"},
                {"role": "assistant", "content": "Hi, how can I help?"}
            ]"#
            .to_string(),
            tool: sample_tool(true),
        };

        let messages = detail.parse_transcript().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "user");
        assert_eq!(messages[1].content, "Hi, how can I help?");
    }

    #[test]
    fn test_transcript_defaults_for_missing_fields() {
        // Older transcripts omit role or content on some entries
        let detail = SessionDetail {
            id: "session-1".to_string(),
            title: "Writer session".to_string(),
            transcript: r#"[{"content": "untagged"}, {"role": "user"}]"#.to_string(),
            tool: sample_tool(true),
        };

        let messages = detail.parse_transcript().unwrap();
        assert_eq!(messages[0].role, "assistant");
        assert_eq!(messages[0].content, "untagged");
        assert_eq!(messages[1].content, "");
    }

    #[test]
    fn test_malformed_transcript_is_an_error() {
        let detail = SessionDetail {
            id: "session-1".to_string(),
            title: "Writer session".to_string(),
            transcript: "not json at all".to_string(),
            tool: sample_tool(true),
        };

        match detail.parse_transcript() {
            Err(ApiError::Transcript(_)) => {}
            other => panic!("expected a transcript error, got {:?}", other),
        }
    }

    #[test]
    fn test_user_message_constructor() {
        let message = TranscriptMessage::user("  ping  ");
        assert_eq!(message.role, "user");
        assert_eq!(message.content, "  ping  ");

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({ "role": "user", "content": "  ping  " }));
    }

    #[test]
    fn test_client_construction_is_fallible_not_silent() {
        // Builder failure must surface instead of dropping the timeout
        let api = ExplorerApi::new(
            "http://localhost:3000".to_string(),
            Some("secret-token".to_string()),
        )
        .expect("client should build with the configured timeout");

        assert_eq!(api.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_error_detail_prefers_json_body() {
        let detail = error_detail(r#"{"error": "task not found"}"#);
        assert_eq!(detail, r#"{"error":"task not found"}"#);

        // Non-JSON bodies pass through untouched
        assert_eq!(error_detail("upstream timeout"), "upstream timeout");
        assert_eq!(error_detail(""), "");
    }

    #[test]
    fn test_embed_hint_follows_policy() {
        assert_eq!(embed_hint(&sample_tool(true)), "Embeds here");
        assert_eq!(embed_hint(&sample_tool(false)), "Opens externally");
    }
}
