//! The `headfake init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create headfake.toml
    if std::path::Path::new("headfake.toml").exists() {
        println!("headfake.toml already exists, skipping.");
    } else {
        std::fs::write("headfake.toml", SAMPLE_CONFIG)?;
        println!("Created headfake.toml");
    }

    // Create the starter bank
    std::fs::create_dir_all("banks")?;
    let starter_path = std::path::Path::new("banks/starter.toml");
    if starter_path.exists() {
        println!("banks/starter.toml already exists, skipping.");
    } else {
        std::fs::write(starter_path, STARTER_BANK)?;
        println!("Created banks/starter.toml");
    }

    println!("\nNext steps:");
    println!("  1. Play offline: headfake play --bank banks/starter.toml");
    println!("  2. Check a bank: headfake validate --bank banks/starter.toml");
    println!("  3. Go live against reddit: headfake play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# headfake configuration

default_source = "reddit"

[game]
bank_size = 25
sort_by = "hot"

[sources.reddit]
type = "reddit"
# reddit throttles generic agents; put a contact address in your own string
# user_agent = "headfake/0.1 (you@example.com)"

[sources.starter]
type = "file"
path = "banks/starter.toml"
"#;

const STARTER_BANK: &str = r#"[bank]
name = "Starter pack"
description = "A small offline bank to try the game without hitting reddit."

[[real]]
title = "Florida man calls 911 after being locked inside unlocked closet"

[[real]]
title = "City spends $2 million on bridge to nowhere, cancels road leading to it"

[[real]]
title = "Study finds people who stay up late know what time it is"
thumbnail = "https://i.example.org/owl.jpg"

[[real]]
title = "Local zoo's escaped peacock returns on its own after two days"

[[real]]
title = "Town council votes to rename itself after typo goes unnoticed for a decade"

[[real]]
title = "Airline apologizes after flight lands at wrong airport with the same name"

[[real]]
title = "Man wins lottery twice in one day using numbers from a fortune cookie"

[[real]]
title = "School cancels snow day after realizing it is June"

[[fake]]
title = "Nation's dogs announce they saw you reach for the leash"

[[fake]]
title = "Area man heroically finishes leftovers no one else would touch"
thumbnail = "https://i.example.org/fridge.jpg"

[[fake]]
title = "Report: 90% of office small talk now about being busy"

[[fake]]
title = "Scientists confirm the other line always moves faster"

[[fake]]
title = "Local cat unsure why you are home at 2 p.m. on a Tuesday"

[[fake]]
title = "New app lets users feel bad about screen time on a second device"

[[fake]]
title = "Study: standing near the oven counts as helping with dinner"

[[fake]]
title = "Breaking: man who said he was five minutes away has not left house"
"#;
