//! Prompt loop used when `jagga` runs without a subcommand.

use std::io::{self, BufRead, Write};

use land_core::{AreaUnit, LinearUnit};

use crate::commands::{self, Context};
use crate::report_error;

/// Print `prompt` and read one trimmed line. `None` on end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Prompt for one of `options`, falling back to `default` on an empty answer.
fn prompt_choice<T>(ctx: &Context, label: &'static str, options: &[T], default: T) -> Option<anyhow::Result<T>>
where
    T: Copy + std::fmt::Display + std::str::FromStr<Err = land_core::LandError>,
{
    let listed = options.iter().map(T::to_string).collect::<Vec<_>>().join(", ");
    let answer = prompt_line(&format!("{} ({}) [{}]: ", ctx.language.t(label), listed, default))?;
    if answer.is_empty() {
        return Some(Ok(default));
    }
    Some(answer.parse().map_err(anyhow::Error::from))
}

fn calculator(ctx: &Context) -> Option<anyhow::Result<()>> {
    let length = prompt_line(&format!("{}: ", ctx.language.t("length")))?;
    let breadth = prompt_line(&format!("{}: ", ctx.language.t("breadth")))?;
    let unit = match prompt_choice(ctx, "unit", &LinearUnit::ALL, LinearUnit::Feet)? {
        Ok(unit) => unit,
        Err(error) => return Some(Err(error)),
    };
    let output = match prompt_choice(ctx, "outputUnit", &AreaUnit::CALCULATOR_OUTPUTS, AreaUnit::Ropani)? {
        Ok(unit) => unit,
        Err(error) => return Some(Err(error)),
    };

    Some(commands::area(ctx, &length, &breadth, unit, output))
}

fn converter(ctx: &Context) -> Option<anyhow::Result<()>> {
    let value = prompt_line(&format!("{}: ", ctx.language.t("value")))?;
    let from = match prompt_choice(ctx, "from", &AreaUnit::ALL, AreaUnit::Ropani)? {
        Ok(unit) => unit,
        Err(error) => return Some(Err(error)),
    };
    let to = match prompt_choice(ctx, "to", &AreaUnit::ALL, AreaUnit::Aana)? {
        Ok(unit) => unit,
        Err(error) => return Some(Err(error)),
    };

    Some(commands::convert_value(ctx, &value, from, to, false))
}

pub fn run(ctx: &mut Context) -> anyhow::Result<()> {
    loop {
        let t = |key: &'static str| ctx.language.t(key);

        println!();
        println!("{}", t("appName"));
        println!("================================");
        println!("  1) {}", t("calculatorTitle"));
        println!("  2) {}", t("converterTitle"));
        println!("  3) {}", t("history"));
        println!("  4) {} ({})", t("language"), ctx.language.toggle());
        println!("  q) {}", t("quit"));

        let Some(choice) = prompt_line("> ") else {
            return Ok(());
        };

        let outcome = match choice.as_str() {
            "1" => calculator(ctx),
            "2" => converter(ctx),
            "3" => Some(commands::history(ctx, false)),
            "4" => Some(commands::language(ctx, Some("toggle"))),
            "q" | "quit" | "exit" => return Ok(()),
            _ => continue,
        };

        match outcome {
            None => return Ok(()),
            Some(Err(error)) => report_error(ctx, &error),
            Some(Ok(())) => {}
        }
    }
}
