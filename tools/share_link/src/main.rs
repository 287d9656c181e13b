use std::env;
use std::fs;

use dotenvy::dotenv;
use grade_horaria::config::DEFAULT_PUBLIC_URL;
use grade_horaria::{codec, transfer};

fn usage() -> ! {
    eprintln!("usage:");
    eprintln!("  share_link encode <grade-horaria.json>   print the share link for an export file");
    eprintln!("  share_link decode <token|link>           print the schedule behind a share token");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let (Some(command), Some(input)) = (args.first(), args.get(1)) else {
        usage();
    };

    match command.as_str() {
        "encode" => {
            let text = fs::read_to_string(input)?;
            let courses = transfer::import_json(&text)?;
            let token = codec::encode(&courses)?;

            let base = env::var("PUBLIC_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_URL.to_string());
            println!("{}/{}", base.trim_end_matches('/'), token);
            eprintln!("Encoded {} courses ({} chars)", courses.len(), token.len());
        }
        "decode" => {
            // Accept a full link as well as the bare token.
            let token = input.rsplit('/').next().unwrap_or(input);
            let courses = codec::try_decode(token)?;
            println!("{}", transfer::export_json(&courses)?);
        }
        _ => usage(),
    }

    Ok(())
}
