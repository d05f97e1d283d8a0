//! Drives a simulated CSS transition from `transition.toml` and logs the
//! class string seen by every lifecycle callback.
//!
//! Run with: `RUST_LOG=debug cargo run -p rune-transition-demo` (environment overrides such as
//! `TRANSITION_CLASS_PREFIX=fade` apply on top of the file).

use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::{debug, info};
use rune_transition::{
    CssTransition, ElementNode, TransitionNode, TransitionProps, TransitionTimeout,
};
use rune_transition_config::TransitionConfig;

const MAX_FRAMES_PER_SEQUENCE: u32 = 100_000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TransitionConfig::try_load().context("failed to load transition configuration")?;
    info!(
        "mounting with class names {:?}, timeout {:?}",
        config.classes.names,
        config.timeout()
    );

    let node = ElementNode::new("div");
    let props = with_logging(config.props());
    let mut transition = CssTransition::mount(node, props);
    settle(&mut transition, &config)?;

    for _ in 0..config.demo.toggles {
        let next = !transition.is_present();
        info!("in = {next}");
        transition.set_present(next);
        settle(&mut transition, &config)?;
    }

    for event in transition.drain_events() {
        debug!("{}", serde_json::to_string(&event)?);
    }
    info!(
        "final status {:?}, class \"{}\"",
        transition.status(),
        transition.node().class_name()
    );
    Ok(())
}

fn with_logging(props: TransitionProps<ElementNode>) -> TransitionProps<ElementNode> {
    props
        .on_enter(|node, appearing| {
            info!("on_enter    appearing={appearing} class=\"{}\"", node.class_name())
        })
        .on_entering(|node, appearing| {
            info!("on_entering appearing={appearing} class=\"{}\"", node.class_name())
        })
        .on_entered(|node, appearing| {
            info!("on_entered  appearing={appearing} class=\"{}\"", node.class_name())
        })
        .on_exit(|node| info!("on_exit     class=\"{}\"", node.class_name()))
        .on_exiting(|node| info!("on_exiting  class=\"{}\"", node.class_name()))
        .on_exited(|node| info!("on_exited   class=\"{}\"", node.class_name()))
}

/// Advance simulated frames until the in-flight sequence completes.
fn settle(transition: &mut CssTransition<ElementNode>, config: &TransitionConfig) -> Result<()> {
    if transition.status().is_settled() {
        return Ok(());
    }
    if config.timeout() == TransitionTimeout::EndSignal {
        debug!("signalling transition end");
        transition.transition_end();
        return Ok(());
    }

    let tick = Duration::from_millis(config.demo.tick_ms.max(1));
    let mut frames = 0;
    while !transition.status().is_settled() {
        if frames == MAX_FRAMES_PER_SEQUENCE {
            bail!("sequence did not settle after {frames} frames");
        }
        transition.advance(tick);
        frames += 1;
    }
    debug!("settled after {frames} frames");
    Ok(())
}
