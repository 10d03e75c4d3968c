//! Menu definitions. Display order is declaration order.

/// A labelled menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuChoice<T> {
    pub label: &'static str,
    pub value: T,
}

/// Root menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootAction {
    InjectDependency,
    InjectCodeScan,
    InjectSecret,
    CopilotMetrics,
    Exit,
}

/// Copilot metrics submenu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsAction {
    Setup,
    OrgUsage,
    EnterpriseUsage,
    UserSeats,
    ExampleCommands,
    Tutorial,
    Visualization,
    Back,
}

pub const ROOT_MENU: &[MenuChoice<RootAction>] = &[
    MenuChoice {
        label: "🔧 Inject Dependency Issue",
        value: RootAction::InjectDependency,
    },
    MenuChoice {
        label: "🔍 Inject Code Scanning Issue",
        value: RootAction::InjectCodeScan,
    },
    MenuChoice {
        label: "🔐 Inject Secret Scanning Issue",
        value: RootAction::InjectSecret,
    },
    MenuChoice {
        label: "📊 GitHub Copilot Metrics Demo",
        value: RootAction::CopilotMetrics,
    },
    MenuChoice {
        label: "🚪 Exit",
        value: RootAction::Exit,
    },
];

pub const METRICS_MENU: &[MenuChoice<MetricsAction>] = &[
    MenuChoice {
        label: "🔧 Check GitHub CLI Setup",
        value: MetricsAction::Setup,
    },
    MenuChoice {
        label: "📈 Organization Usage Metrics",
        value: MetricsAction::OrgUsage,
    },
    MenuChoice {
        label: "🏢 Enterprise Usage Metrics",
        value: MetricsAction::EnterpriseUsage,
    },
    MenuChoice {
        label: "👥 User Activity Metrics",
        value: MetricsAction::UserSeats,
    },
    MenuChoice {
        label: "💡 View Example Commands",
        value: MetricsAction::ExampleCommands,
    },
    MenuChoice {
        label: "📚 View Tutorial Documentation",
        value: MetricsAction::Tutorial,
    },
    MenuChoice {
        label: "📊 Data Visualization Concepts",
        value: MetricsAction::Visualization,
    },
    MenuChoice {
        label: "↩️ Back to Main Menu",
        value: MetricsAction::Back,
    },
];

/// Labels in display order
pub fn labels<T>(choices: &[MenuChoice<T>]) -> Vec<&'static str> {
    choices.iter().map(|c| c.label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_menu_order() {
        let values: Vec<RootAction> = ROOT_MENU.iter().map(|c| c.value).collect();
        assert_eq!(
            values,
            vec![
                RootAction::InjectDependency,
                RootAction::InjectCodeScan,
                RootAction::InjectSecret,
                RootAction::CopilotMetrics,
                RootAction::Exit,
            ]
        );
    }

    #[test]
    fn test_metrics_menu_has_eight_choices_ending_with_back() {
        assert_eq!(METRICS_MENU.len(), 8);
        assert_eq!(METRICS_MENU.last().map(|c| c.value), Some(MetricsAction::Back));
        assert_eq!(labels(METRICS_MENU)[1], "📈 Organization Usage Metrics");
    }
}
