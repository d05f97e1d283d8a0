/// Example program to print the loaded transition configuration
///
/// Run with: cargo run -p rune-transition-config --example print_config

fn main() {
    let config = rune_transition_config::TransitionConfig::load();

    println!("=== Transition Configuration ===\n");

    println!("Classes:");
    println!("  Names: {:?}", config.classes.names);
    if let Err(e) = config.validate() {
        println!("  (invalid: {e})");
    }
    println!();

    println!("Timing:");
    println!("  Enter: {} ms", config.timing.enter_ms);
    println!("  Exit: {} ms", config.timing.exit_ms);
    println!("  Appear: {:?} ms", config.timing.appear_ms);
    println!("  Wait For End Signal: {}", config.timing.wait_for_end_signal);
    println!("  Effective Timeout: {:?}", config.timeout());
    println!();

    println!("Behavior:");
    println!("  Appear: {}", config.behavior.appear);
    println!("  Initially In: {}", config.behavior.initially_in);
    println!();

    println!("Demo:");
    println!("  Toggles: {}", config.demo.toggles);
    println!("  Tick: {} ms", config.demo.tick_ms);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
