//! icdesigner CLI - build integrated circuits from digital logic circuit files.

use clap::{Parser, Subcommand, ValueEnum};
use icdesigner::info::{entity_info, EntityInfo, PropInfo};
use icdesigner::model::{EntityKind, PortKind, WireKind};
use icdesigner::{
    ComponentKind, ICData, IcDesignerCore, IcDesignerError, IcLayoutReport, LayoutOptions,
    SelectionCheck, Vector,
};
use std::path::PathBuf;
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "icdesigner")]
#[command(about = "Integrated circuit builder for digital logic circuits", long_about = None)]
#[command(version)]
struct Cli {
    /// Log layout and validation details to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a selection of a circuit can become an IC
    Check {
        /// Path to a circuit document (.json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Component reference to include (repeatable; default is the whole circuit)
        #[arg(short, long = "select", value_name = "REF")]
        select: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Build an IC from a selection and print its layout
    Create {
        /// Path to a circuit document (.json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Component reference to include (repeatable; default is the whole circuit)
        #[arg(short, long = "select", value_name = "REF")]
        select: Vec<String>,

        /// Override the computed box width
        #[arg(long)]
        width: Option<f64>,

        /// Override the computed box height
        #[arg(long)]
        height: Option<f64>,

        /// Base component size used for the layout
        #[arg(long, default_value_t = LayoutOptions::default().base_size)]
        base_size: f64,

        /// Port stub length used for the layout
        #[arg(long, default_value_t = LayoutOptions::default().port_length)]
        port_length: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Show the descriptor of a component, wire or port kind
    Info {
        /// Component kind (e.g. ANDGate, AND, Switch), `wire` or `port`
        #[arg(value_name = "KIND")]
        kind: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List component kinds
    Kinds {
        /// Show port counts and whether ports can be changed
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .init();

    let exit_code = match cli.command {
        Commands::Check {
            file,
            select,
            format,
        } => handle_check(&file, &select, format),
        Commands::Create {
            file,
            select,
            width,
            height,
            base_size,
            port_length,
            format,
        } => {
            let options = LayoutOptions {
                base_size,
                port_length,
            };
            handle_create(&file, &select, width, height, options, format)
        }
        Commands::Info { kind, format } => handle_info(&kind, format),
        Commands::Kinds { verbose } => {
            handle_kinds(verbose);
            0
        }
    };

    process::exit(exit_code);
}

fn handle_check(file: &PathBuf, select: &[String], format: OutputFormat) -> i32 {
    let result = IcDesignerCore::load_circuit(file)
        .and_then(|circuit| IcDesignerCore::check_selection(&circuit, select));

    match result {
        Ok(check) => {
            match format {
                OutputFormat::Human => output_check_human(&check),
                OutputFormat::Json => print_json(&check),
            }
            if check.valid {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn output_check_human(check: &SelectionCheck) {
    println!(
        "Selection: {} components, {} wires",
        check.components, check.wires
    );
    match &check.reason {
        None => println!("  Valid IC"),
        Some(reason) => println!("  Not a valid IC: {}", reason),
    }
}

fn handle_create(
    file: &PathBuf,
    select: &[String],
    width: Option<f64>,
    height: Option<f64>,
    options: LayoutOptions,
    format: OutputFormat,
) -> i32 {
    for (flag, value) in [("--width", width), ("--height", height)] {
        if let Some(value) = value {
            if !(value > 0.0 && value.is_finite()) {
                eprintln!("Error: {} must be a positive number, got {}", flag, value);
                return 1;
            }
        }
    }

    let result = IcDesignerCore::load_circuit(file)
        .and_then(|circuit| IcDesignerCore::build_ic(&circuit, select, options));

    let mut data: ICData = match result {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if width.is_some() || height.is_some() {
        let size = data.size();
        data.set_size(Vector::new(width.unwrap_or(size.x), height.unwrap_or(size.y)));
    }

    let report = IcDesignerCore::layout_report(&data);
    match format {
        OutputFormat::Human => output_report_human(&report),
        OutputFormat::Json => print_json(&report),
    }
    0
}

fn output_report_human(report: &IcLayoutReport) {
    println!("IC: {} x {}", report.width, report.height);
    println!("{}", "─".repeat(60));
    println!(
        "  {} inputs, {} outputs ({} components, {} wires inside)",
        report.inputs, report.outputs, report.components, report.wires
    );

    for port in &report.ports {
        let name = if port.name.is_empty() { "-" } else { &port.name };
        println!(
            "  {:<6} {:>2}  {:<12} origin {}  target {}",
            port.side, port.index, name, port.origin, port.target
        );
    }
}

fn parse_entity_kind(kind: &str) -> Result<EntityKind, IcDesignerError> {
    if kind.eq_ignore_ascii_case("wire") || kind.eq_ignore_ascii_case("DigitalWire") {
        return Ok(WireKind::DigitalWire.into());
    }
    if kind.eq_ignore_ascii_case("port") || kind.eq_ignore_ascii_case("DigitalPort") {
        return Ok(PortKind::DigitalPort.into());
    }
    Ok(kind.parse::<ComponentKind>()?.into())
}

fn handle_info(kind: &str, format: OutputFormat) -> i32 {
    let kind = match parse_entity_kind(kind) {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let info = entity_info(kind);
    match format {
        OutputFormat::Human => output_info_human(&info),
        OutputFormat::Json => print_json(&info),
    }
    0
}

fn output_info_human(info: &EntityInfo) {
    match info {
        EntityInfo::Component(c) => {
            println!("{} ({})", c.kind.display_name(), c.kind.tag());
            let ports = &c.port_info;
            print!("  Ports: {}", ports.initial_config);
            match (ports.allow_changes, ports.change_group) {
                (true, Some(group)) => println!(" (group {} can change)", group),
                (true, None) => println!(" (can change)"),
                (false, _) => println!(),
            }
        }
        EntityInfo::Wire(w) => println!("{:?}", w.kind),
        EntityInfo::Port(p) => println!("{:?}", p.kind),
    }

    let props = info.prop_info();
    if props.is_empty() {
        println!("  No editable properties");
        return;
    }
    println!("  Properties:");
    for (key, prop) in props.iter() {
        match prop {
            PropInfo::Float {
                label,
                step,
                initial,
                unit,
            } => {
                print!("    {:<8} {:<6} {}", key, prop.type_name(), label);
                if let Some(step) = step {
                    print!(", step {}", step);
                }
                if let Some(initial) = initial {
                    print!(", initial {}", initial);
                }
                if let Some(unit) = unit {
                    print!(" {}", unit.symbol());
                }
                println!();
            }
            PropInfo::Color { label, initial } => {
                println!("    {:<8} {:<6} {}, initial {}", key, prop.type_name(), label, initial);
            }
        }
    }
}

fn handle_kinds(verbose: bool) {
    println!("Available component kinds:\n");

    for kind in ComponentKind::ALL {
        println!("  {:<16} {}", kind.tag(), kind.display_name());
        if verbose {
            let info = icdesigner::component_info(kind);
            println!(
                "    ports {}{}",
                info.port_info.initial_config,
                if info.port_info.allow_changes {
                    ", changeable"
                } else {
                    ""
                }
            );
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}
