//! User-facing texts of the dialogue.

use super::Platform;

pub const GREETING: &str = "👋 Вітаю у AI Content Generator!\n\n\
Я допоможу створювати віральні ідеї та описи для постів.\n\n\
Обери платформу, з якої почнемо:";

pub const PLEASE_START: &str = "Будь ласка, почніть спочатку з команди /start.";

pub const GENERATING: &str = "🤖 Генерую ідеї... Це може зайняти до 30 секунд.";

pub const RESTART_HINT: &str = "Щоб створити новий контент, використайте команду /new.";

/// The only text a user sees when generation fails, whatever the cause.
pub const GENERATION_FAILED: &str =
    "😔 Виникла помилка під час генерації контенту. Спробуйте змінити запит або повторіть пізніше.";

pub const STARTING_OVER: &str = "Починаємо спочатку!";

pub const CANCELLED: &str = "Діалог скасовано.";

pub const CHOOSE_PLATFORM_FIRST: &str = "Спершу обери платформу за допомогою кнопок вище 👆";

pub const STILL_GENERATING: &str =
    "⏳ Ще генерую ідеї для попереднього запиту. Зачекай, будь ласка.";

/// Callback notice for a button that no longer belongs to an active step.
pub const CHOICE_EXPIRED: &str = "Цей вибір вже неактивний. Почни заново з /start.";

pub const HELP: &str = "Доступні команди:\n\
/start — згенерувати ідеї для контенту\n\
/new — почати спочатку\n\
/cancel — скасувати діалог\n\
/help — список команд";

pub fn platform_selected(platform: Platform) -> String {
    format!(
        "Чудово, обрано {}! ✨\n\nТепер вкажи тему або нішу (наприклад: фітнес, подорожі, мотивація, крипта).",
        platform
    )
}

/// Header plus generated ideas, in Telegram legacy Markdown. `ideas` is passed through untouched.
pub fn ideas_message(platform: Platform, topic: &str, ideas: &str) -> String {
    format!(
        "✨ Ось твої ідеї контенту для *{}* на тему {}:\n\n{}",
        platform,
        markdown_bold(topic),
        ideas
    )
}

/// Same message without any markup, for chats where the Markdown version was rejected.
pub fn ideas_message_plain(platform: Platform, topic: &str, ideas: &str) -> String {
    format!(
        "✨ Ось твої ідеї контенту для {} на тему {}:\n\n{}",
        platform, topic, ideas
    )
}

/// Renders `text` bold in legacy Markdown.
///
/// Escapes are not allowed inside an entity, so the bold run is closed before each
/// delimiter character (`_ * ` [`), the escaped character is emitted, and bold reopens after it.
pub fn markdown_bold(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut run = String::new();
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            push_bold_run(&mut out, &mut run);
            out.push('\\');
            out.push(c);
        } else {
            run.push(c);
        }
    }
    push_bold_run(&mut out, &mut run);
    out
}

fn push_bold_run(out: &mut String, run: &mut String) {
    if !run.is_empty() {
        out.push('*');
        out.push_str(run);
        out.push('*');
        run.clear();
    }
}
