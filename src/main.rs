use clap::{Parser, Subcommand};
use miette::{miette, Result};

use addrmon::output::{self, MsgColor};
use addrmon::{error, label_table, AddressParser, LabelAssignment, LabelTable, Radix};

/// Addrmon resolves monitor-style addresses, labels and ranges.
#[derive(Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Default radix for numbers without a `$`, `+`, or `%` prefix [default: 16]
    #[arg(short, long, global = true)]
    radix: Option<Radix>,
    /// Define a label, as `NAME=ADDR`. May be given multiple times
    #[arg(short, long = "label", global = true, value_name = "NAME=ADDR")]
    labels: Vec<LabelAssignment>,
    /// Produce minimal output, suited for scripts and blackbox tests
    #[arg(short, long, global = true)]
    minimal: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a single address, such as `$C000`, `+100`, `%1010`, or `loop+2`
    Number {
        /// Address expression
        #[arg(allow_hyphen_values = true)]
        token: String,
    },
    /// Resolve an address range, such as `$C000:$C0FF` or `start,end`
    Range {
        /// Range expression
        #[arg(allow_hyphen_values = true)]
        token: String,
    },
    /// Convert a BCD byte to its binary value
    Bcd {
        /// BCD byte, in address syntax
        value: String,
    },
    /// Convert a binary value (0 to 99) to a BCD byte
    Tobcd {
        /// Value, in address syntax
        value: String,
    },
    /// Print an integer in another base
    Itoa {
        /// Decimal integer
        #[arg(allow_negative_numbers = true)]
        num: i64,
        /// Base to print in
        #[arg(short, long, default_value_t = Radix::DECIMAL)]
        base: Radix,
    },
}

fn main() -> miette::Result<()> {
    use MsgColor::*;
    let args = Args::parse();
    addrmon::env::init().map_err(|err| miette!("{err}"))?;

    let minimal = args.minimal || addrmon::env::is_minimal();
    output::set_minimal(minimal);

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new() //
                .color(!minimal)
                .build(),
        )
    }))?;

    let radix = args.radix.or_else(addrmon::env::radix).unwrap_or_default();
    let parser = AddressParser::new(radix, label_table(args.labels));

    match args.command {
        Command::Number { token } => {
            let address = parser.number(&token).map_err(error::label_not_found)?;
            output::message(Green, "Address", output::address(address));
        }
        Command::Range { token } => {
            let (start, end) = parser.range(&token).map_err(error::label_not_found)?;
            let range = if minimal {
                format!("{} {}", output::address(start), output::address(end))
            } else {
                format!("{} to {}", output::address(start), output::address(end))
            };
            output::message(Green, "Range", range);
            output::message(Cyan, "Length", u32::from(end - start) + 1);
        }
        Command::Bcd { value } => {
            let bcd = byte(&parser, &value)?;
            output::message(Green, "Binary", addrmon::convert_to_bin(bcd));
        }
        Command::Tobcd { value } => {
            let bin = byte(&parser, &value)?;
            let bcd = addrmon::convert_to_bcd(bin).ok_or_else(|| error::bcd_out_of_range(bin))?;
            output::message(Green, "BCD", format!("${:02X}", bcd));
        }
        Command::Itoa { num, base } => {
            output::message(Green, "Base", addrmon::itoa(num, base));
        }
    }
    Ok(())
}

/// Parse a value in address syntax, which must fit in a byte.
fn byte(parser: &AddressParser<LabelTable>, value: &str) -> Result<u8> {
    let value = parser.number(value).map_err(error::label_not_found)?;
    u8::try_from(value).map_err(|_| error::byte_too_large(value))
}
