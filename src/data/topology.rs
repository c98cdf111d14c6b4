use serde_json::json;

use crate::components::flow_canvas::{
	EdgeDefinition, FlowDefinition, NodeCategory, NodeDefinition, NodeMetadata, NodeStatus, Point,
};

fn service(
	id: &str,
	label: &str,
	category: NodeCategory,
	status: NodeStatus,
	(x, y): (f64, f64),
	links: &[&str],
	metadata: NodeMetadata,
) -> NodeDefinition {
	NodeDefinition {
		id: id.into(),
		label: label.into(),
		category,
		status,
		initial_position: Point::new(x, y),
		outbound_links: links.iter().map(|s| s.to_string()).collect(),
		metadata,
	}
}

fn meta(
	description: &str,
	last_activity: &str,
	(response_time, success_rate, uptime): (&str, &str, &str),
	error_count: u32,
	endpoints: &[&str],
	payload: serde_json::Value,
) -> NodeMetadata {
	NodeMetadata {
		description: description.into(),
		last_activity: last_activity.into(),
		response_time: response_time.into(),
		success_rate: success_rate.into(),
		uptime: uptime.into(),
		error_count,
		endpoints: endpoints.iter().map(|s| s.to_string()).collect(),
		payload,
	}
}

fn link(from: &str, to: &str, label: &str) -> EdgeDefinition {
	EdgeDefinition {
		from: from.into(),
		to: to.into(),
		label: label.into(),
	}
}

/// The monitored deployment: nine services and their nine data-flow links,
/// listed in playback order.
pub fn reference_topology() -> FlowDefinition {
	use NodeCategory::*;
	use NodeStatus::*;

	let nodes = vec![
		service(
			"angular-frontend",
			"Angular Frontend",
			Frontend,
			Healthy,
			(100.0, 200.0),
			&["nodejs-backend", "dotnet-backend"],
			meta(
				"Angular 15 frontend application serving the user interface",
				"GET /api/users - 2 minutes ago",
				("120ms", "99.5%", "99.9%"),
				2,
				&["/dashboard", "/profile", "/settings"],
				json!({
					"method": "GET",
					"headers": { "Content-Type": "application/json" },
					"body": { "userId": 12345, "action": "fetch_profile" }
				}),
			),
		),
		service(
			"nodejs-backend",
			"Node.js Backend",
			Backend,
			Healthy,
			(350.0, 150.0),
			&["mysql-db", "redis-cache", "aws-s3"],
			meta(
				"Node.js Express server handling API requests and business logic",
				"POST /api/upload - 1 minute ago",
				("85ms", "98.2%", "99.8%"),
				5,
				&["/api/users", "/api/upload", "/api/auth"],
				json!({
					"method": "POST",
					"headers": { "Authorization": "Bearer token123" },
					"body": { "file": "document.pdf", "size": "2.5MB" }
				}),
			),
		),
		service(
			"dotnet-backend",
			".NET Backend",
			Backend,
			Healthy,
			(350.0, 250.0),
			&["mysql-db", "payment-gateway", "aws-lambda"],
			meta(
				".NET Core API handling payment processing and data operations",
				"POST /api/payment - 30 seconds ago",
				("95ms", "99.1%", "99.7%"),
				1,
				&["/api/payment", "/api/orders", "/api/inventory"],
				json!({
					"method": "POST",
					"headers": { "Content-Type": "application/json" },
					"body": { "amount": 99.99, "currency": "USD", "cardToken": "tok_123" }
				}),
			),
		),
		service(
			"mysql-db",
			"MySQL Database",
			Database,
			Healthy,
			(600.0, 200.0),
			&[],
			meta(
				"MySQL 8.0 database on AWS RDS storing application data",
				"SELECT * FROM users - 45 seconds ago",
				("45ms", "99.8%", "99.9%"),
				0,
				&["users", "orders", "products", "payments"],
				json!({
					"query": "SELECT id, name, email FROM users WHERE active = 1",
					"params": { "active": 1 },
					"result": { "rows": 1250, "executionTime": "45ms" }
				}),
			),
		),
		service(
			"redis-cache",
			"Redis Cache",
			Cache,
			Warning,
			(600.0, 100.0),
			&[],
			meta(
				"Redis 7.0 in-memory cache for session and data caching",
				"GET user:12345 - 10 seconds ago",
				("15ms", "96.5%", "98.5%"),
				12,
				&["sessions", "cache", "pub/sub"],
				json!({
					"command": "GET",
					"key": "user:12345",
					"value": { "id": 12345, "name": "John Doe", "lastLogin": "2024-01-16T15:30:00Z" }
				}),
			),
		),
		service(
			"aws-s3",
			"AWS S3",
			CloudService,
			Healthy,
			(600.0, 50.0),
			&[],
			meta(
				"AWS S3 bucket for file storage and static assets",
				"PUT /bucket/file.pdf - 2 minutes ago",
				("95ms", "99.9%", "99.99%"),
				0,
				&["/uploads", "/assets", "/backups"],
				json!({
					"operation": "PUT",
					"bucket": "app-storage",
					"key": "uploads/document.pdf",
					"size": "2.5MB",
					"contentType": "application/pdf"
				}),
			),
		),
		service(
			"aws-lambda",
			"AWS Lambda",
			CloudService,
			Healthy,
			(600.0, 300.0),
			&["aws-cloudwatch"],
			meta(
				"AWS Lambda functions for serverless background processing",
				"Invoke processPayment - 1 minute ago",
				("200ms", "99.3%", "99.8%"),
				3,
				&["processPayment", "sendEmail", "generateReport"],
				json!({
					"functionName": "processPayment",
					"event": { "orderId": "ord_123", "amount": 99.99 },
					"response": { "statusCode": 200, "body": "Payment processed successfully" }
				}),
			),
		),
		service(
			"payment-gateway",
			"Payment Gateway",
			Payment,
			Healthy,
			(600.0, 350.0),
			&[],
			meta(
				"Stripe payment gateway for processing transactions",
				"POST /charges - 30 seconds ago",
				("250ms", "99.1%", "99.95%"),
				2,
				&["/charges", "/customers", "/subscriptions"],
				json!({
					"amount": 9999,
					"currency": "usd",
					"source": "tok_visa",
					"description": "Order payment"
				}),
			),
		),
		service(
			"aws-cloudwatch",
			"AWS CloudWatch",
			CloudService,
			Healthy,
			(850.0, 300.0),
			&[],
			meta(
				"AWS CloudWatch for monitoring and logging application metrics",
				"PUT /metrics - 15 seconds ago",
				("150ms", "99.7%", "99.99%"),
				0,
				&["/metrics", "/logs", "/alarms"],
				json!({
					"namespace": "MyApp",
					"metricData": [
						{ "metricName": "RequestCount", "value": 1, "unit": "Count" },
						{ "metricName": "ResponseTime", "value": 150, "unit": "Milliseconds" }
					]
				}),
			),
		),
	];

	let edges = vec![
		link("angular-frontend", "nodejs-backend", "API Requests"),
		link("angular-frontend", "dotnet-backend", "API Calls"),
		link("nodejs-backend", "mysql-db", "Query Data"),
		link("nodejs-backend", "redis-cache", "Cache Data"),
		link("nodejs-backend", "aws-s3", "File Upload"),
		link("dotnet-backend", "mysql-db", "Entity Framework"),
		link("dotnet-backend", "payment-gateway", "Process Payment"),
		link("dotnet-backend", "aws-lambda", "Trigger Function"),
		link("aws-lambda", "aws-cloudwatch", "Log Metrics"),
	];

	FlowDefinition { nodes, edges }
}

/// Healthy / warning / error totals across the topology.
pub fn status_counts(definition: &FlowDefinition) -> (usize, usize, usize) {
	definition
		.nodes
		.iter()
		.fold((0, 0, 0), |(h, w, e), n| match n.status {
			NodeStatus::Healthy => (h + 1, w, e),
			NodeStatus::Warning => (h, w + 1, e),
			NodeStatus::Error => (h, w, e + 1),
		})
}
