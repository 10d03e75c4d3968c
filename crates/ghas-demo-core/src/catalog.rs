//! Static reference content for the informational metrics screens.

use crate::output::{bullets, Line};

/// A documented `gh` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandExample {
    pub title: &'static str,
    pub command: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// A recommended chart for Copilot metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartType {
    pub name: &'static str,
    pub use_case: &'static str,
    pub tools: &'static str,
    pub description: &'static str,
}

pub const COMMAND_EXAMPLES: &[CommandExample] = &[
    CommandExample {
        title: "Organization Usage Metrics",
        command: "gh api /orgs/{org}/copilot/usage",
        description: "Get daily usage metrics for an organization",
        example: "gh api /orgs/github/copilot/usage",
    },
    CommandExample {
        title: "Enterprise Usage Metrics",
        command: "gh api /enterprises/{enterprise}/copilot/usage",
        description: "Get daily usage metrics for an enterprise",
        example: "gh api /enterprises/acme-corp/copilot/usage",
    },
    CommandExample {
        title: "Organization Seat Information",
        command: "gh api /orgs/{org}/copilot/billing/seats",
        description: "Get Copilot seat assignments and billing info",
        example: "gh api /orgs/github/copilot/billing/seats",
    },
    CommandExample {
        title: "Formatted JSON Output",
        command: "gh api /orgs/{org}/copilot/usage | jq .",
        description: "Pretty-print JSON output using jq",
        example: "gh api /orgs/github/copilot/usage | jq .",
    },
    CommandExample {
        title: "Save to File",
        command: "gh api /orgs/{org}/copilot/usage > metrics.json",
        description: "Save metrics data to a file for analysis",
        example: "gh api /orgs/github/copilot/usage > copilot-metrics-2024.json",
    },
    CommandExample {
        title: "Filter Recent Data",
        command: "gh api \"/orgs/{org}/copilot/usage?since=2024-01-01\"",
        description: "Filter metrics since a specific date",
        example: "gh api \"/orgs/github/copilot/usage?since=2024-01-01\"",
    },
];

pub const PREREQUISITES: &[&str] = &[
    "GitHub CLI installed and authenticated",
    "Appropriate permissions (org admin/enterprise admin)",
    "GitHub Copilot Business/Enterprise subscription",
    "jq installed for JSON formatting (optional)",
];

pub const DOCUMENTATION_LINKS: &[&str] = &[
    "GitHub Copilot API: https://docs.github.com/en/rest/copilot",
    "GitHub CLI: https://cli.github.com/",
    "Copilot for Business: https://docs.github.com/en/copilot/copilot-for-business",
];

pub const LEARNING_OBJECTIVES: &[&str] = &[
    "Understand GitHub CLI authentication and setup",
    "Learn Copilot metrics API endpoints and data structure",
    "Interpret usage patterns and adoption metrics",
    "Implement data visualization and reporting",
    "Apply insights for organizational decision-making",
];

pub const TOOLS: &[&str] = &[
    "GitHub CLI (gh)",
    "GitHub REST API",
    "JSON processing tools (jq)",
    "Data visualization libraries",
];

pub const CHART_TYPES: &[ChartType] = &[
    ChartType {
        name: "Time Series Line Chart",
        use_case: "Daily suggestions and acceptance trends",
        tools: "Chart.js, D3.js, Plotly",
        description: "Track usage patterns over time",
    },
    ChartType {
        name: "Bar Chart",
        use_case: "User adoption and activity levels",
        tools: "Chart.js, Matplotlib, ggplot2",
        description: "Compare metrics across teams/organizations",
    },
    ChartType {
        name: "Pie Chart",
        use_case: "Acceptance rate distribution",
        tools: "Chart.js, D3.js, Highcharts",
        description: "Show proportion of accepted vs rejected suggestions",
    },
    ChartType {
        name: "Heatmap",
        use_case: "Activity patterns by time/day",
        tools: "D3.js, Seaborn, Plotly",
        description: "Identify peak usage periods",
    },
    ChartType {
        name: "Dashboard",
        use_case: "Real-time metrics overview",
        tools: "Grafana, Tableau, Power BI",
        description: "Comprehensive metrics monitoring",
    },
];

pub const VISUALIZATION_PRACTICES: &[&str] = &[
    "Use consistent color schemes and themes",
    "Include clear labels and legends",
    "Provide interactive filtering and drilling down",
    "Add trend lines and statistical indicators",
    "Export capabilities for reports and presentations",
];

pub const DASHBOARD_COMPONENTS: &[&str] = &[
    "Total suggestions and acceptance rate KPIs",
    "Daily/weekly/monthly trend charts",
    "Top active users and teams leaderboard",
    "Language-specific usage patterns",
    "Cost per suggestion and ROI calculations",
];

/// Numbered command reference followed by prerequisites
pub fn render_example_commands() -> Vec<Line> {
    let mut lines = Vec::new();
    for (index, cmd) in COMMAND_EXAMPLES.iter().enumerate() {
        lines.push(Line::heading(format!("{}. {}", index + 1, cmd.title)));
        lines.push(Line::detail(format!("   Command: {}", cmd.command)));
        lines.push(Line::info(format!("   Description: {}", cmd.description)));
        lines.push(Line::warning(format!("   Example: {}", cmd.example)));
        lines.push(Line::blank());
    }
    lines.push(Line::success("🔧 Prerequisites:"));
    lines.extend(bullets(PREREQUISITES.iter().copied()));
    lines
}

/// Tutorial pointers, documentation links, objectives and tools
pub fn render_tutorial() -> Vec<Line> {
    let mut lines = vec![
        Line::heading("📖 Step-by-Step Tutorial:"),
        Line::info("See COPILOT_METRICS_TUTORIAL.md for comprehensive documentation"),
        Line::blank(),
        Line::heading("🔗 Official Documentation:"),
    ];
    lines.extend(bullets(DOCUMENTATION_LINKS.iter().copied()));
    lines.push(Line::blank());
    lines.push(Line::heading("🎯 Learning Objectives:"));
    lines.extend(bullets(LEARNING_OBJECTIVES.iter().copied()));
    lines.push(Line::blank());
    lines.push(Line::heading("🛠️ Tools and Technologies:"));
    lines.extend(bullets(TOOLS.iter().copied()));
    lines
}

/// Chart recommendations, best practices and dashboard components
pub fn render_visualization() -> Vec<Line> {
    let mut lines = vec![Line::heading("📈 Recommended Chart Types:"), Line::blank()];
    for (index, chart) in CHART_TYPES.iter().enumerate() {
        lines.push(Line::info(format!("{}. {}", index + 1, chart.name)));
        lines.push(Line::detail(format!("   Use Case: {}", chart.use_case)));
        lines.push(Line::detail(format!("   Tools: {}", chart.tools)));
        lines.push(Line::warning(format!("   Description: {}", chart.description)));
        lines.push(Line::blank());
    }
    lines.push(Line::heading("💡 Visualization Best Practices:"));
    lines.extend(bullets(VISUALIZATION_PRACTICES.iter().copied()));
    lines.push(Line::blank());
    lines.push(Line::heading("📋 Example Metrics Dashboard Components:"));
    lines.extend(bullets(DASHBOARD_COMPONENTS.iter().copied()));
    lines
}
