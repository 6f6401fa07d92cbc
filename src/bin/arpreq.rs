extern crate arpreq;
extern crate getopts;

use getopts::Options;

use std::env;
use std::net::Ipv4Addr;
use std::process;

use arpreq::arp;
use arpreq::NetResult;

#[derive(Debug)]
struct CliOpts {
    interface: String,
    target: Ipv4Addr,
}

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} INTERFACE TARGET_IP", program);
    print!("{}", opts.usage(&brief));
}

fn parse_cli_opts(args: &[String]) -> Result<CliOpts, String> {
    let program = args.get(0).map(String::as_str).unwrap_or("arpreq");
    let mut opts = Options::new();
    opts.optflag("h", "help", "display help information");

    let matches = match opts.parse(args.get(1..).unwrap_or(&[])) {
        Ok(m) => m,
        Err(e) => return Err(e.to_string()),
    };

    if matches.opt_present("help") {
        print_usage(program, &opts);
        process::exit(0);
    }

    if matches.free.len() != 2 {
        return Err(format!(
            "expected an interface name and a target address, got {} argument(s)",
            matches.free.len()
        ));
    }

    let target = matches.free[1]
        .parse::<Ipv4Addr>()
        .map_err(|e| format!("invalid target address '{}': {}", matches.free[1], e))?;

    Ok(CliOpts {
        interface: matches.free[0].clone(),
        target,
    })
}

fn run(cli: &CliOpts) -> NetResult<()> {
    let interface = arpreq::get_interface(&cli.interface)?;
    let mut channel = arpreq::get_channel(&interface, None)?;

    let local_mac = arpreq::hardware_addr(&interface)?;
    let local_ip = arpreq::ipv4_addr(&interface)?;

    let request = arp::build_request(local_mac, local_ip, cli.target);
    println!("{}", request);
    println!();

    let resolved = arp::resolve(&mut channel, &request)?;
    println!("{}", arp::resolution_line(cli.target, resolved));

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let cli = match parse_cli_opts(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!(
                "Usage: {} INTERFACE TARGET_IP",
                args.get(0).map(String::as_str).unwrap_or("arpreq")
            );
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
