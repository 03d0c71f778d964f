//! Bot command menu. Parsed with teloxide's `BotCommands` derive and registered via `setMyCommands`.

use teloxide::utils::command::BotCommands;

use crate::core::Command;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступні команди:")]
pub enum TelegramCommand {
    #[command(description = "згенерувати ідеї для контенту")]
    Start,
    #[command(description = "почати спочатку")]
    New,
    #[command(description = "скасувати діалог")]
    Cancel,
    #[command(description = "список команд")]
    Help,
}

impl From<TelegramCommand> for Command {
    fn from(cmd: TelegramCommand) -> Self {
        match cmd {
            TelegramCommand::Start => Command::Start,
            TelegramCommand::New => Command::New,
            TelegramCommand::Cancel => Command::Cancel,
            TelegramCommand::Help => Command::Help,
        }
    }
}
