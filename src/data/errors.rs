/// Triage priority of an error record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
	/// Outage-level.
	Critical,
	/// User-facing failure.
	High,
	/// Degraded behaviour.
	Medium,
	/// Cosmetic or transient.
	Low,
}

impl Severity {
	/// Lowercase badge text.
	pub fn label(self) -> &'static str {
		match self {
			Self::Critical => "critical",
			Self::High => "high",
			Self::Medium => "medium",
			Self::Low => "low",
		}
	}

	/// CSS classes for the severity badge.
	pub fn badge_class(self) -> &'static str {
		match self {
			Self::Critical => "badge badge-critical",
			Self::High => "badge badge-high",
			Self::Medium => "badge badge-medium",
			Self::Low => "badge badge-low",
		}
	}
}

/// One entry of the error log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorRecord {
	/// Row number shown in the modal title.
	pub id: u32,
	/// Error family, e.g. `API Error`.
	pub kind: &'static str,
	/// Triage priority.
	pub severity: Severity,
	/// Error text as reported.
	pub message: &'static str,
	/// Local time of the occurrence.
	pub timestamp: &'static str,
	/// Reporting service id.
	pub source: &'static str,
	/// Route that failed.
	pub endpoint: &'static str,
	/// HTTP status returned to the caller.
	pub status_code: u16,
}

impl ErrorRecord {
	/// Text class: red for 5xx, amber for 4xx.
	pub fn status_code_class(&self) -> &'static str {
		match self.status_code {
			500.. => "text-error",
			400..=499 => "text-warning",
			_ => "muted",
		}
	}
}

/// Newest first.
pub const ERROR_LOG: &[ErrorRecord] = &[
	ErrorRecord {
		id: 1,
		kind: "API Error",
		severity: Severity::High,
		message: ".NET API validation error - Invalid model state",
		timestamp: "16/1/2024, 3:59:15 PM",
		source: "dotnet-backend",
		endpoint: "/api/validation",
		status_code: 400,
	},
	ErrorRecord {
		id: 2,
		kind: "Payment Error",
		severity: Severity::Critical,
		message: "Payment processing failed - Invalid card number",
		timestamp: "16/1/2024, 3:55:30 PM",
		source: "payment-gateway",
		endpoint: "/api/payments/process",
		status_code: 422,
	},
	ErrorRecord {
		id: 3,
		kind: "API Error",
		severity: Severity::High,
		message: "Payment processing failed - .NET API returned 400 Bad Request",
		timestamp: "16/1/2024, 3:55:30 PM",
		source: "dotnet-backend",
		endpoint: "/api/payments",
		status_code: 400,
	},
	ErrorRecord {
		id: 4,
		kind: "Database Error",
		severity: Severity::Medium,
		message: "Connection timeout to MySQL database",
		timestamp: "16/1/2024, 3:45:22 PM",
		source: "mysql-database",
		endpoint: "/db/connection",
		status_code: 500,
	},
	ErrorRecord {
		id: 5,
		kind: "Authentication Error",
		severity: Severity::Medium,
		message: "JWT token validation failed - Token expired",
		timestamp: "16/1/2024, 3:42:18 PM",
		source: "auth-service",
		endpoint: "/api/auth/validate",
		status_code: 401,
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_codes_map_to_colours() {
		let class_of = |code| {
			ErrorRecord {
				status_code: code,
				..ERROR_LOG[0].clone()
			}
			.status_code_class()
		};
		assert_eq!(class_of(503), "text-error");
		assert_eq!(class_of(422), "text-warning");
		assert_eq!(class_of(302), "muted");
	}
}
