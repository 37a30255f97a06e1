use crate::contact::ContactTransport;
use crate::logging::LogLevel;

pub const SCROLL_THROTTLE_MS: f64 = 16.0;
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;
pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const COUNTER_FRAME_INTERVAL_MS: f64 = 16.0;
pub const NOTIFICATION_LIFETIME_MS: f64 = 5_000.0;
pub const NOTIFICATION_EXIT_MS: f64 = 300.0;
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;
pub const NAVBAR_OFFSET_PX: f64 = 70.0;

pub const DEFAULT_SUBMIT_LATENCY_MS: u32 = 2_000;
pub const SUBMIT_LATENCY_MS_BOUNDS: (u32, u32) = (100, 30_000);
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const LOG_LEVEL_ATTR: &str = "data-log-level";
const CONTACT_ENDPOINT_ATTR: &str = "data-contact-endpoint";
const SUBMIT_LATENCY_ATTR: &str = "data-submit-latency-ms";

/// Frontend settings, read from `data-*` attributes on the mount node.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub transport: ContactTransport,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            transport: ContactTransport::Simulated {
                latency_ms: DEFAULT_SUBMIT_LATENCY_MS,
            },
        }
    }
}

impl SiteConfig {
    pub fn from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = attribute(LOG_LEVEL_ATTR)
            .and_then(|value| LogLevel::from_str(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        let transport = match parse_non_empty(attribute(CONTACT_ENDPOINT_ATTR)) {
            Some(endpoint) => ContactTransport::Http { endpoint },
            None => ContactTransport::Simulated {
                latency_ms: parse_u32_with_bounds(
                    attribute(SUBMIT_LATENCY_ATTR),
                    DEFAULT_SUBMIT_LATENCY_MS,
                    SUBMIT_LATENCY_MS_BOUNDS,
                ),
            },
        };

        Self {
            log_level,
            transport,
        }
    }
}

fn parse_non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u32_with_bounds(value: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
