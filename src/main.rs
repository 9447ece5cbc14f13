use vm_cli::config::ConfigFile;
use vm_cli::error::ResolveError;
use vm_cli::logging;
use vm_cli::namespace::echo;
use vm_cli::resolver::{ResolveContext, Resolver};
use vm_cli::subscription::ConfiguredSubscription;
use vm_cli::table::CommandTable;

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("warning: logging unavailable: {}", e);
    }

    let config = match ConfigFile::load() {
        Ok(config) => config,
        Err(e) => ResolveError::from(e).exit(),
    };

    let table = CommandTable::build();
    let subscriptions = ConfiguredSubscription::from_config(&config);
    let resolver = Resolver::new(&table, ResolveContext::new(&config.defaults, &subscriptions));

    match resolver.resolve_argv(std::env::args()) {
        Ok(invocation) => println!("{}", echo(&invocation.namespace, invocation.output)),
        Err(e) => e.exit(),
    }
}
