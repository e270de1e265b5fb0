use teloxide::utils::command::*;

#[derive(Clone, BotCommands)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "Initialise the admin bot.")]
    Start,
    #[command(description = "Show this help message.")]
    Help,
    #[command(description = "Show platform statistics and recent activity.")]
    Dashboard,
    #[command(description = "List registered users, 10 per page: /users [page]")]
    Users(String),
    #[command(description = "Show one user's full detail: /user <id>")]
    User(String),
    #[command(description = "Show analytics summary and charts.")]
    Analytics,
    #[command(
        description = "Register a new account: /register <phone> <name> <bank>",
        parse_with = "split"
    )]
    Register {
        phone_number: String,
        customer_name: String,
        bank_name: String,
    },
    #[command(description = "Re-run the last view after an error.")]
    Retry,
}
