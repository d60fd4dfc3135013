use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Send a contact record to the webhook
    Send {
        /// JSON file holding the record, or `-` for standard input
        #[clap(short, long)]
        record: Option<String>,
        /// Webhook URL, overriding the environment and the config file
        #[clap(short, long)]
        url: Option<String>,
        /// Stamp LastSynced with the current UTC time
        #[clap(short, long)]
        touch: bool,
        /// Exit with an error when the endpoint answers with a non-2xx status
        #[clap(long)]
        fail_on_reject: bool,
    },
    /// Print the payload that would be sent, without sending it
    Preview {
        /// JSON file holding the record, or `-` for standard input
        #[clap(short, long)]
        record: Option<String>,
        /// Stamp LastSynced with the current UTC time
        #[clap(short, long)]
        touch: bool,
    },
    /// Check the configuration file
    Validate,
    /// Receive contact envelopes on `POST /webhook` and apply them
    Serve {
        /// Address to listen on, overriding `server.host`
        #[clap(long)]
        host: Option<String>,
        /// Port to listen on, overriding `server.port`
        #[clap(short, long)]
        port: Option<u16>,
    },
}
