/// One observed request between two services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowLogEntry {
	/// Log entry key.
	pub id: &'static str,
	/// Caller service id.
	pub source: &'static str,
	/// Callee service id.
	pub target: &'static str,
	/// What was requested.
	pub description: &'static str,
	/// Correlation id.
	pub request_id: &'static str,
	/// Round-trip time.
	pub response_time: &'static str,
	/// Relative time of the request.
	pub timestamp: &'static str,
}

/// Newest first.
pub const FLOW_LOG: &[FlowLogEntry] = &[
	FlowLogEntry {
		id: "req_010",
		source: "dotnet-backend",
		target: "aws-cloudwatch",
		description: "Application metrics logged to CloudWatch",
		request_id: "req_010",
		response_time: "150ms",
		timestamp: "4:04:05 PM",
	},
	FlowLogEntry {
		id: "req_007",
		source: "aws-lambda",
		target: "mysql-database",
		description: "Lambda function updated database records",
		request_id: "req_007",
		response_time: "180ms",
		timestamp: "4:03:30 PM",
	},
	FlowLogEntry {
		id: "req_006",
		source: "dotnet-backend",
		target: "aws-lambda",
		description: "Background processing triggered via AWS Lambda",
		request_id: "req_006",
		response_time: "200ms",
		timestamp: "4:03:25 PM",
	},
	FlowLogEntry {
		id: "req_005",
		source: "nodejs-backend",
		target: "aws-s3",
		description: "File uploaded to S3 bucket",
		request_id: "req_005",
		response_time: "95ms",
		timestamp: "4:02:10 PM",
	},
	FlowLogEntry {
		id: "req_005b",
		source: "dotnet-backend",
		target: "aws-s3",
		description: "File uploaded to S3 via .NET AWS SDK",
		request_id: "req_005",
		response_time: "95ms",
		timestamp: "4:02:10 PM",
	},
	FlowLogEntry {
		id: "req_009",
		source: "dotnet-backend",
		target: "payment-gateway",
		description: "Payment processed successfully via external API",
		request_id: "req_009",
		response_time: "250ms",
		timestamp: "4:01:40 PM",
	},
	FlowLogEntry {
		id: "req_002",
		source: "nodejs-backend",
		target: "mysql-database",
		description: "User data retrieved from database",
		request_id: "req_002",
		response_time: "45ms",
		timestamp: "4:00:20 PM",
	},
	FlowLogEntry {
		id: "req_002b",
		source: "dotnet-backend",
		target: "mysql-database",
		description: "Entity Framework query executed successfully",
		request_id: "req_002",
		response_time: "45ms",
		timestamp: "4:00:20 PM",
	},
];
