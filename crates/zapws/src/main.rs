use std::cell::RefCell;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::rc::Rc;

use zap_options::Options;

mod scan;
use scan::scan;

const PROGRAM: &str = "zapws";

fn init_logger() -> anyhow::Result<()> {
    alto_logger::init_alt_term_logger()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logger()?;

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        usage();
    }

    let path = Rc::new(RefCell::new(None));

    let mut options = Options::default();
    options.on("f", true, {
        let path = Rc::clone(&path);
        move |m| *path.borrow_mut() = m.argument.map(String::from)
    });
    options.on_invalid(|_| usage());
    options.parse(args);

    let path = match path.borrow_mut().take() {
        Some(path) => path,
        None => usage(),
    };

    if !Path::new(&path).is_file() {
        println!("invalid path or not a file: {}", path);
        std::process::exit(1);
    }

    log::debug!("scanning {}", path);

    let file = File::open(&path)?;
    for flagged in scan(BufReader::new(file)) {
        let (lineno, line) = flagged?;
        println!("{:>4}  {}", lineno, line);
    }

    Ok(())
}

fn usage() -> ! {
    println!("usage: {} -f filepath", PROGRAM);
    std::process::exit(1);
}
