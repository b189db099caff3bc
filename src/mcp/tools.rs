//! MCP tools: dataset loads, route queries and dataset stats.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::types::{LoadDataArgs, LoadDataReply, RouteArgs, ToolDefinition, ToolsCallResult};
use crate::graph::{no_route_message, RouteResponse};
use crate::parser::EdgeParser;
use crate::route::{calculate_optimal_route, load_data};
use crate::store::SharedStore;

/// Return the list of all available tools with their JSON schemas.
pub fn list_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "load_data".to_string(),
            description: "Replace the travel-time dataset. Content is one `from;to;time` \
                record per line; a header line starting with `loc_start` is ignored."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "content": {
                        "type": "string",
                        "description": "Full text of the travel-time file"
                    }
                },
                "required": ["content"]
            }),
        },
        ToolDefinition {
            name: "route".to_string(),
            description: "Find the fastest route between two locations in the loaded \
                dataset. Returns the ordered locations and the total travel time."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "from": {
                        "type": "string",
                        "description": "Starting location (e.g., 'R11')"
                    },
                    "to": {
                        "type": "string",
                        "description": "Destination location (e.g., 'CP2')"
                    }
                },
                "required": ["from", "to"]
            }),
        },
        ToolDefinition {
            name: "stats".to_string(),
            description: "Number of travel-time records and distinct locations loaded."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}

/// Dispatch a tool call.
///
/// `Err` means the shared dataset could not be locked; every other failure is
/// reported as a tool error result.
pub fn call_tool(
    store: &SharedStore,
    parser: &EdgeParser,
    name: &str,
    arguments: &Value,
) -> Result<ToolsCallResult, String> {
    match name {
        "load_data" => handle_load_data(store, parser, arguments),
        "route" => handle_route(store, arguments),
        "stats" => handle_stats(store),
        _ => Ok(ToolsCallResult::error(format!("Unknown tool: {}", name))),
    }
}

/// Decode tool arguments; a shape mismatch becomes a tool error result.
fn parse_args<T: DeserializeOwned>(tool: &str, args: &Value) -> Result<T, ToolsCallResult> {
    T::deserialize(args).map_err(|e| {
        ToolsCallResult::error(format!("Invalid arguments for {}: {}", tool, e))
    })
}

fn handle_load_data(
    store: &SharedStore,
    parser: &EdgeParser,
    args: &Value,
) -> Result<ToolsCallResult, String> {
    let args: LoadDataArgs = match parse_args("load_data", args) {
        Ok(a) => a,
        Err(result) => return Ok(result),
    };

    let mut guard = store
        .write()
        .map_err(|e| format!("Dataset lock error: {}", e))?;

    match load_data(&mut guard, parser, &args.content) {
        Ok(count) => ToolsCallResult::json(&LoadDataReply::loaded(count)),
        Err(e) => Ok(ToolsCallResult::error(e.to_string())),
    }
}

fn handle_route(store: &SharedStore, args: &Value) -> Result<ToolsCallResult, String> {
    let RouteArgs { from, to } = match parse_args("route", args) {
        Ok(a) => a,
        Err(result) => return Ok(result),
    };

    let guard = store
        .read()
        .map_err(|e| format!("Dataset lock error: {}", e))?;

    let result = match calculate_optimal_route(&guard, &from, &to) {
        Ok(r) => r,
        Err(e) => return Ok(ToolsCallResult::error(e.to_string())),
    };

    match RouteResponse::from_path(&result) {
        Some(response) => ToolsCallResult::json(&response),
        None => Ok(ToolsCallResult::error(no_route_message(&from, &to))),
    }
}

fn handle_stats(store: &SharedStore) -> Result<ToolsCallResult, String> {
    let guard = store
        .read()
        .map_err(|e| format!("Dataset lock error: {}", e))?;
    ToolsCallResult::json(&guard.stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DatasetStore;

    fn call(store: &SharedStore, name: &str, args: Value) -> ToolsCallResult {
        call_tool(store, &EdgeParser::default(), name, &args).unwrap()
    }

    fn loaded_store() -> SharedStore {
        let store = DatasetStore::shared();
        let result = call(
            &store,
            "load_data",
            json!({"content": "loc_start;loc_end;time\nR11;R12;20\nR12;R13;9\nR13;R20;11"}),
        );
        assert!(!result.is_error());
        store
    }

    #[test]
    fn test_list_tools() {
        let names: Vec<String> = list_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["load_data", "route", "stats"]);
    }

    #[test]
    fn test_load_data_reports_count() {
        let store = DatasetStore::shared();
        let result = call(&store, "load_data", json!({"content": "A;B;1\nB;C;2"}));
        let body: Value = serde_json::from_str(result.first_text()).unwrap();
        assert_eq!(body["recordsProcessed"], 2);
        assert_eq!(body["message"], "Data loaded successfully");
    }

    #[test]
    fn test_load_data_invalid_content() {
        let store = loaded_store();
        let result = call(&store, "load_data", json!({"content": "R11;R12"}));
        assert!(result.is_error());
        assert!(result.first_text().contains("got 2 fields"));
        assert_eq!(store.read().unwrap().count(), 3);
    }

    #[test]
    fn test_route_found() {
        let store = loaded_store();
        let result = call(&store, "route", json!({"from": "R11", "to": "R20"}));
        assert!(!result.is_error());
        let body: Value = serde_json::from_str(result.first_text()).unwrap();
        assert_eq!(body["ruta"], json!(["R11", "R12", "R13", "R20"]));
        assert_eq!(body["tiempoTotal"], 40);
    }

    #[test]
    fn test_route_not_found() {
        let store = loaded_store();
        let result = call(&store, "route", json!({"from": "R20", "to": "R11"}));
        assert!(result.is_error());
        assert_eq!(result.first_text(), "No route found between R20 and R11");
    }

    #[test]
    fn test_route_missing_or_empty_params() {
        let store = loaded_store();
        let result = call(&store, "route", json!({"from": "R11"}));
        assert!(result.is_error());
        assert!(result.first_text().contains("missing field `to`"));

        let result = call(&store, "route", json!({"from": "R11", "to": 7}));
        assert!(result.is_error());
        assert!(result.first_text().starts_with("Invalid arguments for route"));

        let result = call(&store, "route", json!({"from": "", "to": "R20"}));
        assert!(result.is_error());
        assert!(result.first_text().contains("From parameter"));
    }

    #[test]
    fn test_stats() {
        let store = loaded_store();
        let result = call(&store, "stats", json!({}));
        let body: Value = serde_json::from_str(result.first_text()).unwrap();
        assert_eq!(body["edge_count"], 3);
        assert_eq!(body["location_count"], 4);
    }

    #[test]
    fn test_load_data_requires_content() {
        let store = loaded_store();
        let result = call(&store, "load_data", json!({}));
        assert!(result.is_error());
        assert!(result.first_text().contains("content"));
        assert_eq!(store.read().unwrap().count(), 3);
    }

    #[test]
    fn test_route_reply_is_pretty_json() {
        let store = loaded_store();
        let result = call(&store, "route", json!({"from": "R11", "to": "R13"}));
        assert_eq!(
            result.first_text(),
            "{\n  \"ruta\": [\n    \"R11\",\n    \"R12\",\n    \"R13\"\n  ],\n  \"tiempoTotal\": 29\n}"
        );
    }

    #[test]
    fn test_unknown_tool() {
        let store = DatasetStore::shared();
        let result = call(&store, "teleport", json!({}));
        assert!(result.is_error());
    }
}
