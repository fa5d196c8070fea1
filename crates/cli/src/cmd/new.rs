use std::path::Path;

use chrono::Utc;
use mdcards_core::meta::{TopicIndex, TopicMeta};
use mdcards_core::scaffold::{TemplateOptions, create_topic_file};
use tracing::{debug, warn};

use crate::NewArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &NewArgs) {
    let rc = super::load_config(config, profile, "new");
    debug!("Running new for '{}'", args.topic_id);

    let mut opts = TemplateOptions::new(args.topic_id.as_str(), args.title.join(" "));
    if let Some(desc) = &args.description {
        opts.description.clone_from(desc);
    }
    opts.num_cards = args.cards;
    opts.include_main_text = !args.no_main_text;

    let path = match create_topic_file(&rc.markdown_dir, &opts) {
        Ok(p) => p,
        Err(e) => {
            println!("FAIL mdc new");
            println!("{e}");
            std::process::exit(1);
        }
    };

    // Index failures leave the new file in place.
    let entry = TopicMeta {
        id: opts.topic_id.clone(),
        title: opts.title.clone(),
        description: opts.description.clone(),
    };
    let indexed = TopicIndex::load(&rc.meta_file).and_then(|mut index| {
        index.merge(std::slice::from_ref(&entry));
        index.save(&rc.meta_file, Utc::now())
    });
    if let Err(e) = &indexed {
        warn!("Topic index not updated: {e}");
    }

    println!("OK   mdc new");
    println!("path: {}", path.display());
    if indexed.is_ok() {
        println!("index: {}", rc.meta_file.display());
    }
}
