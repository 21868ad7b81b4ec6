//! Time left until the public launch.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use pro_core::{pad2, TimeLeft};

use super::CountdownArgs;
use crate::context::Context;

/// Run the countdown command.
pub async fn run(args: CountdownArgs, ctx: &Context) -> Result<()> {
    let launch_at = ctx.config.site.launch_at;
    let left = TimeLeft::until(&launch_at, Utc::now());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "launch_at": launch_at.to_rfc3339(),
            "days": left.days,
            "hours": left.hours,
            "minutes": left.minutes,
            "seconds": left.seconds,
        }));
        return Ok(());
    }

    ctx.output.header(&ctx.config.site.name);
    ctx.output.kv("Lanzamiento", &launch_at.to_rfc3339());

    if !args.watch || left.is_zero() {
        println!("  {}", render(&left));
        return Ok(());
    }

    let spinner = ctx.output.spinner(&render(&left));
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    loop {
        ticker.tick().await;
        let left = TimeLeft::until(&launch_at, Utc::now());
        spinner.set_message(render(&left));
        if left.is_zero() {
            break;
        }
    }
    spinner.finish_with_message(render(&TimeLeft::default()));

    Ok(())
}

/// `03 días : 00 hrs : 00 min : 05 seg`
pub fn render(left: &TimeLeft) -> String {
    left.units()
        .iter()
        .map(|(value, label)| format!("{} {}", pad2(*value), label))
        .collect::<Vec<_>>()
        .join(" : ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let left = TimeLeft::from_seconds(3 * 86_400 + 5);
        assert_eq!(render(&left), "03 días : 00 hrs : 00 min : 05 seg");
    }

    #[test]
    fn test_render_after_launch() {
        assert_eq!(
            render(&TimeLeft::default()),
            "00 días : 00 hrs : 00 min : 00 seg"
        );
    }
}
