//! Literal time series and breakdowns behind the analytics page.

/// One reading of host load and latency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceSample {
	/// Clock label.
	pub time: &'static str,
	/// Percent.
	pub cpu: f64,
	/// Percent.
	pub memory: f64,
	/// Milliseconds.
	pub response: f64,
}

/// Requests and errors for a four-hour bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrafficSample {
	/// Hour of day, two digits.
	pub hour: &'static str,
	/// Requests served.
	pub requests: f64,
	/// Requests that failed.
	pub errors: f64,
}

/// Traffic and latency of one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointStat {
	/// Route path.
	pub name: &'static str,
	/// Requests this month.
	pub requests: u32,
	/// Mean response time.
	pub avg_time_ms: u32,
}

/// Share of services in one health state, as a percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HealthSlice {
	/// Health state.
	pub name: &'static str,
	/// Percentage of services.
	pub value: f64,
	/// CSS colour of the slice.
	pub color: &'static str,
}

/// Headline card: title, value, subtitle, change.
pub type AnalyticsMetric = (&'static str, &'static str, &'static str, &'static str);

/// Six readings across one day.
pub const PERFORMANCE: &[PerformanceSample] = &[
	PerformanceSample { time: "00:00", cpu: 45.0, memory: 62.0, response: 120.0 },
	PerformanceSample { time: "04:00", cpu: 52.0, memory: 58.0, response: 135.0 },
	PerformanceSample { time: "08:00", cpu: 78.0, memory: 71.0, response: 180.0 },
	PerformanceSample { time: "12:00", cpu: 85.0, memory: 79.0, response: 220.0 },
	PerformanceSample { time: "16:00", cpu: 92.0, memory: 85.0, response: 195.0 },
	PerformanceSample { time: "20:00", cpu: 67.0, memory: 73.0, response: 165.0 },
];

/// Requests and errors per four-hour bucket.
pub const TRAFFIC: &[TrafficSample] = &[
	TrafficSample { hour: "00", requests: 1200.0, errors: 12.0 },
	TrafficSample { hour: "04", requests: 800.0, errors: 8.0 },
	TrafficSample { hour: "08", requests: 2400.0, errors: 18.0 },
	TrafficSample { hour: "12", requests: 3200.0, errors: 25.0 },
	TrafficSample { hour: "16", requests: 2800.0, errors: 22.0 },
	TrafficSample { hour: "20", requests: 1800.0, errors: 15.0 },
];

/// Busiest first.
pub const ENDPOINTS: &[EndpointStat] = &[
	EndpointStat { name: "/api/users", requests: 15420, avg_time_ms: 145 },
	EndpointStat { name: "/api/orders", requests: 12350, avg_time_ms: 220 },
	EndpointStat { name: "/api/products", requests: 9870, avg_time_ms: 180 },
	EndpointStat { name: "/api/auth", requests: 8650, avg_time_ms: 95 },
	EndpointStat { name: "/api/analytics", requests: 6420, avg_time_ms: 310 },
];

/// Healthy, warning and critical shares.
pub const SYSTEM_HEALTH: &[HealthSlice] = &[
	HealthSlice { name: "Healthy", value: 85.0, color: "#10b981" },
	HealthSlice { name: "Warning", value: 12.0, color: "#f59e0b" },
	HealthSlice { name: "Critical", value: 3.0, color: "#ef4444" },
];

/// Cards across the top of the analytics page.
pub const ANALYTICS_METRICS: &[AnalyticsMetric] = &[
	("Total Requests", "2.4M", "This Month", "+12.5% from last month"),
	("Avg Response Time", "165ms", "System Average", "-8.2% from last month"),
	("Active Users", "12,847", "Currently Online", "+5.1% from last month"),
	("System Uptime", "99.9%", "This Month", "+0.1% from last month"),
];

/// `15420` -> `15,420`.
pub fn group_thousands(n: u32) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn groups_thousands() {
		assert_eq!(group_thousands(0), "0");
		assert_eq!(group_thousands(950), "950");
		assert_eq!(group_thousands(15420), "15,420");
		assert_eq!(group_thousands(2_400_000), "2,400,000");
	}

	#[test]
	fn health_shares_sum_to_whole() {
		let total: f64 = SYSTEM_HEALTH.iter().map(|s| s.value).sum();
		assert_eq!(total, 100.0);
	}
}
