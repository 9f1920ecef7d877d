// ABOUTME: Interactive shell for smoothie-cli
// ABOUTME: Reads commands from stdin while a pending generation completes in the background
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use std::io::Write as _;

use smoothie_lab::{
    controller::AppController,
    errors::{AppError, AppResult, ErrorCode},
    models::{Category, Recipe},
    presentation::{render_history, render_ingredient_tags, render_quantities, render_stars},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

type Result<T> = AppResult<T>;

use crate::helpers::display::{display_recipe, flush_notifications};

const HELP: &str = "\
commands:
  list [term]                 show ingredients (optionally filtered)
  add <category> <name>       add a custom ingredient
  remove <category> <name>    remove an ingredient
  toggle <category> <name>    select or unselect an ingredient
  qty <category> <+N|-N|N>    change how many of a category go in a recipe
  generate                    start generating a recipe
  cancel                      cancel a pending generation
  save [rating]               save the current recipe to history
  history                     list saved recipes
  load <index>                show a saved recipe
  rate <index> [rating]       rate a saved recipe (no rating clears it)
  help                        show this help
  quit                        leave the shell
categories: fruits, veggies, liquids";

/// Parsed shell input
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    List(Option<String>),
    Add(Category, String),
    Remove(Category, String),
    Toggle(Category, String),
    Quantity(Category, QuantityChange),
    Generate,
    Cancel,
    Save(Option<u8>),
    History,
    Load(usize),
    Rate(usize, Option<u8>),
    Help,
    Quit,
}

/// Absolute or relative quantity input
#[derive(Debug, PartialEq, Eq)]
enum QuantityChange {
    Delta(i64),
    Raw(String),
}

/// Run the interactive loop until `quit` or end of input
pub async fn run(controller: &mut AppController) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}");
    prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse(&line) {
                    Ok(None) => {}
                    Ok(Some(ShellCommand::Quit)) => break,
                    Ok(Some(command)) => {
                        if let Err(e) = execute(controller, command) {
                            debug!(error = %e, "Shell command failed");
                            report(&e);
                        }
                    }
                    Err(e) => report(&e),
                }
                flush_notifications(controller);
                prompt();
            }
            recipe = wait_pending(controller) => {
                println!();
                if let Some(recipe) = recipe {
                    display_recipe(&recipe);
                }
                flush_notifications(controller);
                prompt();
            }
        }
    }
    Ok(())
}

async fn wait_pending(controller: &mut AppController) -> Option<Recipe> {
    if controller.is_generating() {
        controller.wait_generation().await
    } else {
        std::future::pending().await
    }
}

fn prompt() {
    print!("smoothie> ");
    // Prompt is cosmetic; a failed flush only delays it
    let _ = std::io::stdout().flush();
}

fn report(error: &AppError) {
    // Controller errors already raised a notification
    if error.code == ErrorCode::InvalidInput {
        println!("✖ {}", error.message);
    }
}

fn parse(line: &str) -> Result<Option<ShellCommand>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match verb {
        "list" | "ls" => ShellCommand::List((!rest.is_empty()).then(|| rest.join(" "))),
        "add" => {
            let (category, name) = category_and_name(&rest)?;
            ShellCommand::Add(category, name)
        }
        "remove" | "rm" => {
            let (category, name) = category_and_name(&rest)?;
            ShellCommand::Remove(category, name)
        }
        "toggle" => {
            let (category, name) = category_and_name(&rest)?;
            ShellCommand::Toggle(category, name)
        }
        "qty" => {
            let [category, value] = rest.as_slice() else {
                return Err(AppError::invalid_input("usage: qty <category> <+N|-N|N>"));
            };
            let change = if value.starts_with('+') || value.starts_with('-') {
                QuantityChange::Delta(value.parse().map_err(|_| {
                    AppError::invalid_input(format!("'{value}' is not a number"))
                })?)
            } else {
                QuantityChange::Raw((*value).to_owned())
            };
            ShellCommand::Quantity(category.parse()?, change)
        }
        "generate" | "gen" => ShellCommand::Generate,
        "cancel" => ShellCommand::Cancel,
        "save" => ShellCommand::Save(optional_rating(rest.first().copied())?),
        "history" => ShellCommand::History,
        "load" => ShellCommand::Load(index(rest.first().copied())?),
        "rate" => ShellCommand::Rate(
            index(rest.first().copied())?,
            optional_rating(rest.get(1).copied())?,
        ),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => {
            return Err(AppError::invalid_input(format!(
                "unknown command '{other}' (type 'help')"
            )))
        }
    };
    Ok(Some(command))
}

fn category_and_name(rest: &[&str]) -> Result<(Category, String)> {
    match rest {
        [category, name @ ..] if !name.is_empty() => Ok((category.parse()?, name.join(" "))),
        _ => Err(AppError::invalid_input("usage: <command> <category> <name>")),
    }
}

fn index(raw: Option<&str>) -> Result<usize> {
    raw.and_then(|raw| raw.parse().ok())
        .ok_or_else(|| AppError::invalid_input("expected a history index"))
}

fn optional_rating(raw: Option<&str>) -> Result<Option<u8>> {
    raw.map(|raw| {
        raw.parse::<u8>()
            .map_err(|_| AppError::invalid_input(format!("'{raw}' is not a rating (0-5)")))
    })
    .transpose()
}

fn execute(controller: &mut AppController, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::List(term) => {
            let state = controller.state();
            print!(
                "{}",
                render_ingredient_tags(&state.ingredients, &state.selection, term.as_deref())
            );
            println!("{}", render_quantities(&state.quantities));
        }
        ShellCommand::Add(category, name) => {
            controller.add_ingredient(category, &name)?;
        }
        ShellCommand::Remove(category, name) => {
            if !controller.remove_ingredient(category, &name)? {
                println!("{name} は {} にありません", category.display_name());
            }
        }
        ShellCommand::Toggle(category, name) => {
            let selected = controller.toggle_selection(category, &name)?;
            println!("{} {name}", if selected { "[x]" } else { "[ ]" });
        }
        ShellCommand::Quantity(category, change) => {
            let stored = match change {
                QuantityChange::Delta(delta) => controller.adjust_quantity(category, delta),
                QuantityChange::Raw(raw) => controller.set_quantity_from_input(category, &raw),
            };
            println!("{}: {stored}", category.display_name());
        }
        ShellCommand::Generate => {
            controller.request_generation()?;
            println!("レシピを生成中... ('cancel' で中止)");
        }
        ShellCommand::Cancel => {
            if !controller.cancel_generation() {
                println!("生成中のレシピはありません");
            }
        }
        ShellCommand::Save(rating) => {
            controller.save_current(rating)?;
        }
        ShellCommand::History => {
            print!("{}", render_history(controller.state().history.entries()));
        }
        ShellCommand::Load(index) => {
            let recipe = controller.restore_from_history(index)?.clone();
            display_recipe(&recipe);
        }
        ShellCommand::Rate(index, rating) => {
            let stored = controller.rate_history(index, rating)?;
            println!("{index}: {}", render_stars(stored));
        }
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_with_spaces() {
        assert_eq!(
            parse("add liquids oat milk").unwrap(),
            Some(ShellCommand::Add(Category::Liquids, "oat milk".to_owned()))
        );
    }

    #[test]
    fn test_parse_quantity_forms() {
        assert_eq!(
            parse("qty fruits +2").unwrap(),
            Some(ShellCommand::Quantity(Category::Fruits, QuantityChange::Delta(2)))
        );
        assert_eq!(
            parse("qty veggies -1").unwrap(),
            Some(ShellCommand::Quantity(Category::Veggies, QuantityChange::Delta(-1)))
        );
        assert_eq!(
            parse("qty liquids abc").unwrap(),
            Some(ShellCommand::Quantity(
                Category::Liquids,
                QuantityChange::Raw("abc".to_owned())
            ))
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse("add fruits").is_err());
        assert!(parse("add grains kale").is_err());
        assert!(parse("load").is_err());
        assert!(parse("dance").is_err());
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_optional_rating() {
        assert_eq!(parse("save").unwrap(), Some(ShellCommand::Save(None)));
        assert_eq!(parse("rate 1 4").unwrap(), Some(ShellCommand::Rate(1, Some(4))));
        assert_eq!(parse("rate 1").unwrap(), Some(ShellCommand::Rate(1, None)));
    }
}
