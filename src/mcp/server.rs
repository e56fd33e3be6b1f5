/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads JSON-RPC requests from stdin
/// 2. Processes tool calls using our water counter
/// 3. Sends JSON-RPC responses to stdout

use std::collections::HashMap;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::mcp::protocol::*;
use crate::tools::{self, CounterResponse, ToolError};
use crate::{ServerError, WaterCounterServer};

/// MCP server that handles communication with the client
pub struct McpServer {
    /// The underlying water counter server
    water_counter: WaterCounterServer,
    /// Whether the client has finished initialization
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(water_counter: WaterCounterServer) -> Self {
        Self {
            water_counter,
            initialized: false,
        }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line) {
                        let response_str = serde_json::to_string(&response)?;

                        // Write response + newline
                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        match request.id.clone() {
            Some(id) => Some(self.handle_request(id, request)),
            None => {
                self.handle_notification(&request);
                None
            }
        }
    }

    /// Handle a notification (a request without an id, which gets no response)
    fn handle_notification(&mut self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" | "initialized" => {
                self.initialized = true;
                info!("MCP client initialized");
            }
            other => debug!("Ignoring notification '{}'", other),
        }
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, id: Value, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(id, json!(null))
            }
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params),
            _ => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, id: Value) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "Water Counter MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        to_response(id, &result)
    }

    /// Handle tools/list request
    fn handle_tools_list(&mut self, id: Value) -> JsonRpcResponse {
        let no_arguments = json!({"type": "object", "properties": {}, "required": []});

        let tools = vec![
            ToolDefinition {
                name: "water_status".to_string(),
                description: "Show today's glass count, goal, progress and a motivational message".to_string(),
                input_schema: no_arguments.clone(),
            },
            ToolDefinition {
                name: "water_add".to_string(),
                description: "Log one or two glasses of water for today".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "glasses": {"type": "integer", "enum": [1, 2], "description": "How many glasses to add (1 or 2, defaults to 1)"}
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "water_remove".to_string(),
                description: "Take back one glass (the count never goes below zero)".to_string(),
                input_schema: no_arguments.clone(),
            },
            ToolDefinition {
                name: "water_reset".to_string(),
                description: "Reset today's glass count to zero".to_string(),
                input_schema: no_arguments.clone(),
            },
            ToolDefinition {
                name: "goal_adjust".to_string(),
                description: "Raise or lower the daily goal by one glass (minimum 1)".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "direction": {"type": "string", "enum": ["increase", "decrease"], "description": "Which way to move the goal"}
                    },
                    "required": ["direction"]
                }),
            },
            ToolDefinition {
                name: "goal_reset".to_string(),
                description: "Put the daily goal back to the default of 10 glasses".to_string(),
                input_schema: no_arguments,
            },
        ];

        JsonRpcResponse::success(id, json!({"tools": tools}))
    }

    /// Handle tools/call request
    fn handle_tools_call(&mut self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        let result = match tool_params.name.as_str() {
            "water_status" => self.call_water_status(),
            "water_add" => self.call_water_add(tool_params.arguments),
            "water_remove" => self.call_water_remove(),
            "water_reset" => self.call_water_reset(),
            "goal_adjust" => self.call_goal_adjust(tool_params.arguments),
            "goal_reset" => self.call_goal_reset(),
            _ => ToolCallResult::error(format!("Unknown tool: {}", tool_params.name)),
        };

        to_response(id, &result)
    }

    /// Call the water_status tool
    fn call_water_status(&self) -> ToolCallResult {
        into_tool_result(tools::get_status(self.water_counter.store()))
    }

    /// Call the water_add tool
    fn call_water_add(&self, args: HashMap<String, Value>) -> ToolCallResult {
        let glasses = match args.get("glasses") {
            None | Some(Value::Null) => None,
            Some(value) => match value.as_u64() {
                Some(n) => Some(n),
                None => return ToolCallResult::error(format!("'glasses' must be 1 or 2, got {}", value)),
            },
        };

        let add_params = tools::AddWaterParams { glasses };
        into_tool_result(tools::add_water(
            self.water_counter.store(),
            self.water_counter.feedback(),
            add_params,
        ))
    }

    /// Call the water_remove tool
    fn call_water_remove(&self) -> ToolCallResult {
        into_tool_result(tools::remove_water(
            self.water_counter.store(),
            self.water_counter.feedback(),
        ))
    }

    /// Call the water_reset tool
    fn call_water_reset(&self) -> ToolCallResult {
        into_tool_result(tools::reset_water(self.water_counter.store()))
    }

    /// Call the goal_adjust tool
    fn call_goal_adjust(&self, args: HashMap<String, Value>) -> ToolCallResult {
        let goal_params = tools::AdjustGoalParams {
            direction: args.get("direction")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        };

        into_tool_result(tools::adjust_daily_goal(self.water_counter.store(), goal_params))
    }

    /// Call the goal_reset tool
    fn call_goal_reset(&self) -> ToolCallResult {
        into_tool_result(tools::reset_daily_goal(self.water_counter.store()))
    }
}

/// Turn a tool outcome into an MCP tool result
fn into_tool_result(result: Result<CounterResponse, ToolError>) -> ToolCallResult {
    match result {
        Ok(response) => {
            let structured = serde_json::to_value(&response.snapshot).ok();
            ToolCallResult::success(response.message, structured)
        }
        Err(e) => {
            if let ToolError::Storage(ref storage_error) = e {
                error!("Tool failed on storage: {}", storage_error);
            }
            ToolCallResult::error(e.to_string())
        }
    }
}

/// Serialize a result into a JSON-RPC response
fn to_response<T: Serialize>(id: Value, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            format!("Failed to serialize result: {}", e),
            None,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DailyCounterStore, RecordingFeedback, SqliteStorage};

    fn server() -> McpServer {
        let store = DailyCounterStore::new(SqliteStorage::in_memory().unwrap());
        let water_counter =
            WaterCounterServer::with_parts(store, Box::new(RecordingFeedback::new())).unwrap();
        McpServer::new(water_counter)
    }

    fn call(server: &mut McpServer, id: i64, name: &str, arguments: Value) -> Value {
        let line = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": {"name": name, "arguments": arguments}
        })
        .to_string();
        let response = server.process_line(&line).unwrap();
        assert!(response.error.is_none());
        response.result.unwrap()
    }

    #[test]
    fn test_initialize() {
        let mut server = server();
        let response = server
            .process_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], json!(MCP_VERSION));
        assert_eq!(result["serverInfo"]["name"], json!("Water Counter MCP"));
    }

    #[test]
    fn test_initialized_notification_gets_no_response() {
        let mut server = server();
        let response =
            server.process_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#);
        assert!(response.is_none());
        assert!(server.initialized);
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut server = server();
        assert!(server.process_line("   \n").is_none());
    }

    #[test]
    fn test_parse_error() {
        let mut server = server();
        let response = server.process_line("{not json").unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::PARSE_ERROR);
    }

    #[test]
    fn test_unknown_method() {
        let mut server = server();
        let response = server
            .process_line(r#"{"jsonrpc":"2.0","id":7,"method":"resources/list"}"#)
            .unwrap();
        assert_eq!(response.id, json!(7));
        assert_eq!(response.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
    }

    #[test]
    fn test_tools_call_without_params() {
        let mut server = server();
        let response = server
            .process_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/call"}"#)
            .unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
    }

    #[test]
    fn test_tools_list_names() {
        let mut server = server();
        let response = server
            .process_line(r#"{"jsonrpc":"2.0","id":3,"method":"tools/list"}"#)
            .unwrap();

        let result = response.result.unwrap();
        let names: Vec<&str> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["water_status", "water_add", "water_remove", "water_reset", "goal_adjust", "goal_reset"]
        );
        assert!(result["tools"][0]["inputSchema"].is_object());
    }

    #[test]
    fn test_add_then_remove_through_protocol() {
        let mut server = server();

        let result = call(&mut server, 1, "water_add", json!({"glasses": 2}));
        assert_eq!(result["isError"], json!(false));
        assert_eq!(result["structuredContent"]["count"], json!(2));

        let result = call(&mut server, 2, "water_remove", json!({}));
        assert_eq!(result["structuredContent"]["count"], json!(1));
        assert_eq!(server.water_counter.store().get_count(), 1);
    }

    #[test]
    fn test_tool_errors_are_results() {
        let mut server = server();

        let result = call(&mut server, 1, "water_add", json!({"glasses": 5}));
        assert_eq!(result["isError"], json!(true));

        let result = call(&mut server, 2, "goal_adjust", json!({}));
        assert_eq!(result["isError"], json!(true));

        let result = call(&mut server, 3, "water_drink", json!({}));
        assert_eq!(result["isError"], json!(true));
        assert!(result["content"][0]["text"].as_str().unwrap().contains("Unknown tool"));
    }

    #[test]
    fn test_goal_tools_through_protocol() {
        let mut server = server();

        let result = call(&mut server, 1, "goal_adjust", json!({"direction": "decrease"}));
        assert_eq!(result["structuredContent"]["goal"], json!(9));

        let result = call(&mut server, 2, "goal_reset", json!({}));
        assert_eq!(result["structuredContent"]["goal"], json!(10));

        let result = call(&mut server, 3, "water_status", json!({}));
        assert_eq!(result["structuredContent"]["motivation"]["kind"], json!("start_of_day"));
    }
}
