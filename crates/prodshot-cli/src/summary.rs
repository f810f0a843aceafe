use std::path::Path;
use std::time::Duration;

use console::Style;
use prodshot_core::config::Settings;
use prodshot_core::session::Session;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_generate_summary(session: &Session, settings: &Settings) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Prodshot"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    if let Some(original) = session.original() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Photo"),
            s.path.apply_to(original.name())
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("Type"),
            s.value.apply_to(original.media_type())
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("Size"),
            s.value.apply_to(format_size(original.len()))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Model"),
        s.method.apply_to(&settings.model)
    );
    println!();

    println!("  {}", s.header.apply_to("Request"));
    if session.prompt() == session.default_prompt() {
        println!(
            "    {}",
            s.disabled.apply_to(format!("{} (default)", session.prompt()))
        );
    } else {
        println!("    {}", s.value.apply_to(session.prompt()));
    }
    println!();
}

pub fn print_result_summary(session: &Session, saved_to: &Path, elapsed: Duration) {
    let s = Styles::new();

    if let Some(generated) = session.generated() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Result"),
            s.value.apply_to(format!(
                "{} ({})",
                generated.media_type(),
                format_size(generated.len())
            ))
        );
    }
    if let Some(advisory) = session.advisory() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Model says"),
            s.value.apply_to(advisory)
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Took"),
        s.method.apply_to(format!("{:.1}s", elapsed.as_secs_f32()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Saved"),
        s.path.apply_to(saved_to.display())
    );
    println!();
}

fn format_size(bytes: usize) -> String {
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{kb:.1} KB")
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}
