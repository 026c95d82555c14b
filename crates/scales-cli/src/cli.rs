//! Local commands run against the tracker without a chat transport.

use anyhow::{bail, Context, Result};
use log::error;
use scales_core::{display::PlanOverview, Tracker};
use tokio::io::{self, AsyncBufReadExt, BufReader};

use crate::{
    args::{LogArgs, PlanArgs, StatusArgs},
    renderer::TerminalRenderer,
};

/// Runs local commands for a single user.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    user_id: i64,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, user_id: i64) -> Self {
        Self {
            tracker,
            renderer,
            user_id,
        }
    }

    /// Answers the three intake questions from the arguments.
    pub async fn create_plan(&self, args: PlanArgs) -> Result<()> {
        let answers = [
            "/plan".to_owned(),
            args.current.to_string(),
            args.target.to_string(),
            args.weeks.to_string(),
        ];

        let mut last_reply = None;
        for answer in &answers {
            last_reply = self
                .tracker
                .handle_message(self.user_id, answer)
                .await
                .context("Failed to create plan")?;
        }

        if self.tracker.intake_state(self.user_id).await.is_some() {
            bail!("Plan intake did not complete");
        }
        if let Some(reply) = last_reply {
            self.renderer.reply(&reply);
        }
        Ok(())
    }

    /// Logs one weight and prints the progress report.
    pub async fn log_weight(&self, args: LogArgs) -> Result<()> {
        let reply = self
            .tracker
            .handle_message(self.user_id, &args.weight.to_string())
            .await
            .context("Failed to log weight")?;

        if let Some(reply) = reply {
            self.renderer.reply(&reply);
        }
        Ok(())
    }

    /// Prints the active plan and history.
    pub async fn show_status(&self, args: StatusArgs) -> Result<()> {
        let plan = self
            .tracker
            .get_plan(self.user_id)
            .await
            .context("Failed to load plan")?;
        let weights = self
            .tracker
            .get_weights(self.user_id)
            .await
            .context("Failed to load weight history")?;

        if args.json {
            let status = serde_json::json!({ "plan": plan, "weights": weights });
            println!("{}", serde_json::to_string_pretty(&status)?);
            return Ok(());
        }

        match plan {
            Some(plan) => self
                .renderer
                .render(&PlanOverview::new(&plan, &weights).to_string()),
            None => self.renderer.reply("No active plan. Create one with `scales plan`."),
        }
        Ok(())
    }

    /// Treats every stdin line as a chat message from the local user.
    ///
    /// Failures are logged and the conversation continues, as on the
    /// webhook.
    pub async fn chat(&self) -> Result<()> {
        let mut lines = BufReader::new(io::stdin()).lines();

        while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            match self.tracker.handle_message(self.user_id, text).await {
                Ok(Some(reply)) => self.renderer.reply(&reply),
                Ok(None) => {}
                Err(e) => error!("Failed to handle message: {e}"),
            }
        }
        Ok(())
    }
}
