use std::io::Read;
use std::path::Path;

use crate::cli::{Cli, Commands, CompareArgs, SystemTokenSource};
use crate::core::{build_comparison, build_comparison_for_model, estimate_tokens};
use crate::error::AppError;
use crate::output::{
    NumberFormat, TableOptions, load_record, print_comparison_table, print_pricing_table,
    print_query_table, record_to_json, save_record,
};
use crate::pricing::{PricingDb, TokenType};
use crate::source::{load_system_prompt, sample_queries};
use crate::utils::{ElapsedTimer, timed};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) pricing_db: &'a PricingDb,
    pub(crate) number_format: NumberFormat,
}

impl CommandContext<'_> {
    fn table_options(&self) -> TableOptions {
        TableOptions {
            use_color: self.cli.use_color(),
            number_format: self.number_format,
        }
    }
}

fn print_json(json: &str) {
    if json.ends_with('\n') {
        print!("{json}");
    } else {
        println!("{json}");
    }
}

fn to_pretty_json(value: &serde_json::Value) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(AppError::Serialize)
}

fn system_prompt_tokens(source: &SystemTokenSource) -> Result<u64, AppError> {
    match (&source.prompt, source.system_tokens) {
        (Some(path), _) => {
            let prompt = timed("Loading system prompt", || load_system_prompt(path))?;
            let tokens = estimate_tokens(&prompt);
            tracing::info!("System prompt: ~{} tokens ({})", tokens, path.display());
            Ok(tokens)
        }
        (None, Some(tokens)) => Ok(tokens),
        (None, None) => Err(AppError::invalid_input(
            "either --prompt or --system-tokens is required",
        )),
    }
}

fn handle_compare(args: &CompareArgs, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let system_tokens = system_prompt_tokens(&args.source)?;
    let query_tokens = args.query_tokens();
    let traditional_tokens = system_tokens
        .checked_add(query_tokens)
        .ok_or_else(|| AppError::invalid_input("system prompt plus query tokens overflow"))?;
    let num_requests = args.requests();

    let mut timer = ElapsedTimer::start("Building comparison");
    let record = timer.run(|| match args.model.as_deref() {
        Some(model) => build_comparison_for_model(
            traditional_tokens,
            query_tokens,
            num_requests,
            model,
            ctx.pricing_db,
        ),
        None => build_comparison(traditional_tokens, query_tokens, num_requests, ctx.pricing_db),
    })?;

    if ctx.cli.json {
        print_json(&record_to_json(&record)?);
    } else {
        let default_model = ctx.pricing_db.default_model();
        let model = args.model.as_deref().unwrap_or(default_model);
        let pricing_label = if ctx.pricing_db.is_known(model) {
            model.to_string()
        } else {
            format!("{model} (priced as {default_model})")
        };
        print_comparison_table(&record, Some(&pricing_label), ctx.table_options());
    }

    if !args.no_save {
        let path = args.output_path();
        timed("Saving comparison record", || save_record(&record, &path))?;
        tracing::info!("Comparison saved to {}", path.display());
    }

    Ok(())
}

fn read_estimate_input(file: Option<&Path>, text: Option<&str>) -> Result<String, AppError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return load_system_prompt(path);
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| AppError::io("read", "<stdin>", e))?;
    Ok(input)
}

fn handle_estimate(
    file: Option<&Path>,
    text: Option<&str>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let input = read_estimate_input(file, text)?;
    let characters = input.chars().count();
    let tokens = estimate_tokens(&input);

    if ctx.cli.json {
        let value = serde_json::json!({
            "characters": characters,
            "tokens": tokens,
        });
        print_json(&to_pretty_json(&value)?);
    } else {
        println!("~{tokens} tokens ({characters} characters)");
    }
    Ok(())
}

fn handle_show(path: &Path, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let record = load_record(path)?;
    if ctx.cli.json {
        print_json(&record_to_json(&record)?);
    } else {
        print_comparison_table(&record, None, ctx.table_options());
    }
    Ok(())
}

fn handle_pricing(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if ctx.cli.json {
        let models: serde_json::Map<String, serde_json::Value> = ctx
            .pricing_db
            .model_ids()
            .map(|name| {
                (
                    name.to_string(),
                    serde_json::json!({
                        "input_per_token": ctx.pricing_db.rate_for(name, TokenType::Input),
                        "output_per_token": ctx.pricing_db.rate_for(name, TokenType::Output),
                    }),
                )
            })
            .collect();
        let value = serde_json::json!({
            "default_model": ctx.pricing_db.default_model(),
            "models": models,
        });
        print_json(&to_pretty_json(&value)?);
    } else {
        print_pricing_table(ctx.pricing_db, ctx.table_options());
    }
    Ok(())
}

fn handle_queries(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let queries = sample_queries();
    if ctx.cli.json {
        let value: Vec<serde_json::Value> = queries
            .iter()
            .map(|query| {
                serde_json::json!({
                    "query": query,
                    "tokens": estimate_tokens(query),
                })
            })
            .collect();
        print_json(&to_pretty_json(&serde_json::Value::Array(value))?);
    } else {
        print_query_table(queries, ctx.table_options());
    }
    Ok(())
}

/// Dispatch the parsed command
pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match &ctx.cli.command {
        Commands::Compare(args) => handle_compare(args, ctx),
        Commands::Estimate { file, text } => {
            handle_estimate(file.as_deref(), text.as_deref(), ctx)
        }
        Commands::Show { path } => handle_show(path, ctx),
        Commands::Pricing => handle_pricing(ctx),
        Commands::Queries => handle_queries(ctx),
    }
}
