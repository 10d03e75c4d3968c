use anyhow::{anyhow, Result};
use std::io::Write;
use tracing::{debug, info};

use ghas_demo_core::catalog;
use ghas_demo_core::inject::{InjectError, Injection, Injector};
use ghas_demo_core::metrics::examples::{insights, InsightTopic};
use ghas_demo_core::metrics::format::{render_seats, render_usage};
use ghas_demo_core::output::bullets;
use ghas_demo_core::{check_setup, CommandRunner, Diagnosis, Fetched, Line, MetricsClient, Scope, Tone};

use super::banner::{clear_screen, BANNER, SUBTITLE};
use super::menu::{labels, MenuChoice, MetricsAction, RootAction, METRICS_MENU, ROOT_MENU};
use super::printer::Printer;
use super::prompt::Prompter;
use crate::config::Settings;

/// Where the menu loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    RootMenu,
    MetricsSubmenu,
    Terminated,
}

/// Main application: an explicit menu state machine
pub struct App<P, R, W> {
    settings: Settings,
    prompter: P,
    metrics: MetricsClient<R>,
    injector: Injector,
    printer: Printer<W>,
}

impl<P: Prompter, R: CommandRunner, W: Write> App<P, R, W> {
    /// Create a new application
    pub fn new(settings: Settings, prompter: P, runner: R, out: W) -> Self {
        let injector = Injector::new(settings.project_root());
        let printer = Printer::new(out, settings.ui.color);

        Self {
            settings,
            prompter,
            metrics: MetricsClient::new(runner),
            injector,
            printer,
        }
    }

    /// Run until the user chooses Exit
    pub async fn run(&mut self) -> Result<()> {
        if self.settings.ui.show_banner {
            self.show_banner()?;
        }

        let mut state = MenuState::RootMenu;
        while state != MenuState::Terminated {
            state = self.step(state).await?;
        }
        Ok(())
    }

    /// Advance the state machine by one prompt
    pub async fn step(&mut self, state: MenuState) -> Result<MenuState> {
        debug!("Menu state: {:?}", state);
        match state {
            MenuState::RootMenu => self.root_menu().await,
            MenuState::MetricsSubmenu => self.metrics_menu().await,
            MenuState::Terminated => Ok(MenuState::Terminated),
        }
    }

    /// Consume the app, returning the output writer
    pub fn into_output(self) -> W {
        self.printer.into_inner()
    }

    fn show_banner(&mut self) -> Result<()> {
        if self.settings.ui.clear_screen {
            clear_screen(self.printer.writer_mut())?;
        }
        self.printer.say(Tone::Heading, BANNER)?;
        self.printer.say(Tone::Warning, SUBTITLE)?;
        Ok(())
    }

    fn choose<T: Copy>(&mut self, message: &str, choices: &[MenuChoice<T>]) -> Result<T> {
        let index = self.prompter.select(message, &labels(choices))?;
        choices
            .get(index)
            .map(|c| c.value)
            .ok_or_else(|| anyhow!("Invalid menu selection: {}", index))
    }

    async fn root_menu(&mut self) -> Result<MenuState> {
        let action = self.choose("What would you like to do?", ROOT_MENU)?;
        info!("Root menu: {:?}", action);

        match action {
            RootAction::InjectDependency => {
                self.printer
                    .say(Tone::Warning, "🔧 Injecting vulnerable dependency...")?;
                let result = self.injector.inject_dependency();
                self.report_injection(result)?;
            }
            RootAction::InjectCodeScan => {
                self.printer
                    .say(Tone::Warning, "🔍 Injecting code scanning issue...")?;
                let result = self.injector.inject_code_scan();
                self.report_injection(result)?;
            }
            RootAction::InjectSecret => {
                self.printer
                    .say(Tone::Warning, "🔐 Injecting secret scanning issue...")?;
                let result = self.injector.inject_secret();
                self.report_injection(result)?;
            }
            RootAction::CopilotMetrics => return Ok(MenuState::MetricsSubmenu),
            RootAction::Exit => {
                self.printer
                    .say(Tone::Success, "👋 Thanks for using GHAS Demo!")?;
                return Ok(MenuState::Terminated);
            }
        }

        Ok(MenuState::RootMenu)
    }

    fn report_injection(&mut self, result: Result<Injection, InjectError>) -> Result<()> {
        match result {
            Ok(injection) => {
                self.printer.lines(&[
                    Line::error(format!("✅ Injected {}", injection.summary)),
                    Line::detail(format!("   Wrote {}", injection.path.display())),
                    Line::info(format!("💡 {}", injection.follow_up)),
                ])?;
            }
            Err(e) => {
                info!("Injection failed: {}", e);
                self.printer.say(Tone::Error, format!("❌ Injection failed: {}", e))?;
            }
        }
        Ok(())
    }

    async fn metrics_menu(&mut self) -> Result<MenuState> {
        self.printer.lines(&[
            Line::heading("\n📊 GitHub Copilot Metrics API Demo\n"),
            Line::warning("This demo shows how to use GitHub CLI to fetch Copilot usage metrics."),
            Line::info("Note: Requires GitHub CLI (gh) installed and authenticated.\n"),
        ])?;

        let action = self.choose("What would you like to explore?", METRICS_MENU)?;
        info!("Metrics menu: {:?}", action);

        match action {
            MetricsAction::Setup => self.check_setup().await?,
            MetricsAction::OrgUsage => self.show_usage(Scope::Organization).await?,
            MetricsAction::EnterpriseUsage => self.show_usage(Scope::Enterprise).await?,
            MetricsAction::UserSeats => self.show_seats().await?,
            MetricsAction::ExampleCommands => self.show_reference(
                "\n💡 GitHub CLI Command Examples for Copilot Metrics\n",
                catalog::render_example_commands(),
            )?,
            MetricsAction::Tutorial => self.show_reference(
                "\n📚 GitHub Copilot Metrics Tutorial Information\n",
                catalog::render_tutorial(),
            )?,
            MetricsAction::Visualization => self.show_reference(
                "\n📊 Data Visualization Concepts for Copilot Metrics\n",
                catalog::render_visualization(),
            )?,
            MetricsAction::Back => return Ok(MenuState::RootMenu),
        }

        Ok(MenuState::MetricsSubmenu)
    }

    fn show_reference(&mut self, title: &str, lines: Vec<Line>) -> Result<()> {
        self.printer.say(Tone::Warning, title)?;
        self.printer.lines(&lines)?;
        Ok(())
    }

    async fn check_setup(&mut self) -> Result<()> {
        self.printer
            .say(Tone::Warning, "\n🔧 Checking GitHub CLI Setup...\n")?;

        match check_setup(self.metrics.runner()).await {
            Ok(status) => self.printer.lines(&[
                Line::success("✅ GitHub CLI is installed:"),
                Line::detail(status.version),
                Line::success("\n✅ GitHub CLI is authenticated:"),
                Line::detail(status.auth_status),
                Line::info("\n💡 Your GitHub CLI is ready for Copilot metrics!"),
            ])?,
            Err(diagnosis) => {
                self.printer
                    .say(Tone::Error, "❌ GitHub CLI setup issue detected.\n")?;
                self.printer.lines(&diagnosis.lines())?;
                self.printer
                    .say(Tone::Info, "\n📖 For more info: https://cli.github.com/")?;
            }
        }
        Ok(())
    }

    fn print_fetch_error(&mut self, context: &str, diagnosis: &Diagnosis) -> Result<()> {
        self.printer
            .say(Tone::Error, format!("❌ Error fetching {} metrics:\n", context))?;
        self.printer.lines(&diagnosis.lines())?;
        self.printer
            .say(Tone::Info, "\n💡 Showing example data instead...\n")?;
        Ok(())
    }

    async fn show_usage(&mut self, scope: Scope) -> Result<()> {
        let (icon, prompt, required) = match scope {
            Scope::Organization => (
                "📈",
                "Enter your organization name (e.g., \"octocat-org\"):",
                "Organization name is required",
            ),
            Scope::Enterprise => (
                "🏢",
                "Enter your enterprise name (e.g., \"acme-corp\"):",
                "Enterprise name is required",
            ),
        };
        self.printer.say(
            Tone::Warning,
            format!("\n{} {}-Level Copilot Metrics\n", icon, scope.title()),
        )?;

        let name = self.prompter.input(prompt, required)?;
        let command_label = match scope {
            Scope::Organization => "Command for usage metrics:",
            Scope::Enterprise => "Command for enterprise usage metrics:",
        };
        self.printer.lines(&[
            Line::info(format!(
                "\n🔍 Fetching Copilot metrics for {}: {}\n",
                scope, name
            )),
            Line::heading(command_label),
            Line::detail(format!("$ {}", self.metrics.usage_command(scope, &name))),
            Line::warning("\n⏳ Executing command...\n"),
        ])?;

        let report = self.metrics.usage_report(scope, &name).await;
        let heading = Line::success(format!("✅ {} Copilot Usage Metrics:\n", scope.title()));
        match report {
            Fetched::Live(records) => {
                self.printer.line(&heading)?;
                self.printer.lines(&render_usage(&records, scope))?;
            }
            Fetched::Fallback { diagnosis, example } => {
                self.print_fetch_error(&format!("{} usage", scope), &diagnosis)?;
                self.printer.say(
                    Tone::Info,
                    format!("\n📊 Example {} Metrics Data:\n", scope.title()),
                )?;
                self.printer.line(&heading)?;
                self.printer.lines(&render_usage(&example, scope))?;
                self.printer.say(
                    Tone::Warning,
                    format!("\n💡 Key Insights from {} Metrics:", scope.title()),
                )?;
                self.printer
                    .lines(&bullets(insights(InsightTopic::from(scope)).iter().copied()))?;
            }
        }
        Ok(())
    }

    async fn show_seats(&mut self) -> Result<()> {
        self.printer
            .say(Tone::Warning, "\n👥 User Activity and Seat Metrics\n")?;

        let org = self.prompter.input(
            "Enter organization name for user metrics:",
            "Organization name is required",
        )?;
        self.printer.lines(&[
            Line::heading("Command for seat information:"),
            Line::detail(format!("$ {}", self.metrics.seats_command(&org))),
            Line::warning("\n⏳ Fetching seat information...\n"),
        ])?;

        match self.metrics.seats_report(&org).await {
            Fetched::Live(response) => {
                self.printer.say(Tone::Success, "✅ Copilot Seat Information:\n")?;
                self.printer
                    .lines(&render_seats(&response.seats, response.total_seats))?;
            }
            Fetched::Fallback { diagnosis, example } => {
                self.print_fetch_error("user seats", &diagnosis)?;
                self.printer
                    .say(Tone::Info, "\n📊 Example User Metrics Data:\n")?;
                self.printer
                    .say(Tone::Success, "✅ Example Copilot Seat Information:")?;
                self.printer
                    .lines(&render_seats(&example.seats, example.total_seats))?;
                self.printer.say(Tone::Warning, "💡 User Metrics Insights:")?;
                self.printer
                    .lines(&bullets(insights(InsightTopic::Seats).iter().copied()))?;
            }
        }
        Ok(())
    }
}
