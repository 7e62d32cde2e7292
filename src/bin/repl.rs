use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{stdin, stdout, Write};
use talkie_core::config::TalkieConfig;
use talkie_core::{
    get_menu, logging, process_chat_input, ChatContext, Language, TalkieError, TranslatorEngine,
};

fn main() -> Result<(), TalkieError> {
    let _ = dotenvy::dotenv();
    logging::init("talkie_core=warn");

    let config = TalkieConfig::parse();
    let mut engine = TranslatorEngine::from_seed_file_or_builtin(config.seed.as_deref())?;
    let mut context = ChatContext::new(config.language).with_native(config.native());

    print_header(&config.native_language)?;

    loop {
        print!("{} ", format!("[{}] >", context.current_language).cyan());
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "" => continue,
            "exit" => break,
            "clear" => print_header(&config.native_language)?,
            s if s.starts_with(":lang") => {
                let id = s.trim_start_matches(":lang").trim();
                match id.parse::<Language>() {
                    Ok(language) => {
                        context.current_language = language;
                        println!("{}", format!("Target language: {}", language.display_name()).green());
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
            s => {
                let reply = process_chat_input(&mut engine, context, s);
                println!("{}\n", reply.response.as_str().white());
            }
        }
    }

    println!("\n{}", "Adiós!".bold());
    Ok(())
}

fn print_header(native_language: &str) -> Result<(), TalkieError> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Talkie".bold().cyan());
    println!("---------------------------------------------------------------");
    println!("Type a word or phrase to translate. 'cambiar' shows the menu.");
    println!("':lang <id>' switches the target language, 'exit' quits.\n");
    println!("{}\n", get_menu(native_language).dark_grey());
    Ok(())
}
