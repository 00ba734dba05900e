use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};

use belltime_engine::model::{SubjectAllocation, TimingSettings};
use belltime_engine::{allocator, generator, validator};

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
enum Request {
    /// Generate the day's period/break slots from the timing settings.
    Schedule { settings: TimingSettings },
    /// Summarize the weekly subject load against the capacity derived from
    /// the timing settings.
    Summarize {
        settings: TimingSettings,
        allocations: Vec<SubjectAllocation>,
    },
    /// Validate the timing settings without generating output.
    Validate { settings: TimingSettings },
}

#[derive(Debug, Serialize)]
struct OkResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ErrResponse {
    ok: bool,
    error: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_ok<T: Serialize>(data: T) {
    let resp = OkResponse { ok: true, data };
    let json = serde_json::to_string(&resp).unwrap_or_else(|e| {
        format!("{{\"ok\":false,\"error\":\"serialization error: {}\"}}", e)
    });
    println!("{}", json);
    let _ = io::stdout().flush();
}

fn write_err(msg: impl std::fmt::Display) -> ! {
    let resp = ErrResponse {
        ok: false,
        error: msg.to_string(),
    };
    let json = serde_json::to_string(&resp).unwrap_or_else(|_| {
        "{\"ok\":false,\"error\":\"double serialization error\"}".to_string()
    });
    println!("{}", json);
    let _ = io::stdout().flush();
    std::process::exit(1);
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    // Read all of stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        write_err(format!("Failed to read stdin: {}", e));
    }

    // Parse request
    let request: Request = match serde_json::from_str(&input) {
        Ok(r) => r,
        Err(e) => write_err(format!("Invalid JSON input: {}", e)),
    };

    match request {
        Request::Schedule { settings } => match generator::generate_from_settings(&settings) {
            Ok(schedule) => write_ok(schedule),
            Err(e) => write_err(e),
        },
        Request::Summarize {
            settings,
            allocations,
        } => match allocator::summarize_week(&settings, &allocations) {
            Ok(summary) => write_ok(summary),
            Err(e) => write_err(e),
        },
        Request::Validate { settings } => {
            let result = validator::validate(&settings);
            write_ok(result);
        }
    }
}
