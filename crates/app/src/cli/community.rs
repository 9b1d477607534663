use std::io::Write;

use clap::{Args, Subcommand};
use keepstudy::community::{ChannelFeed, ChannelKind, Message};
use keepstudy_app::errors::AppError;

#[derive(Debug, Args)]
pub(crate) struct CommunityCommand {
    #[command(subcommand)]
    command: CommunitySubcommand,
}

#[derive(Debug, Subcommand)]
enum CommunitySubcommand {
    /// Show channels, members and the selected channel's messages
    Show(ShowArgs),

    /// Post a message (kept for this run only)
    Post(PostArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Channel id; defaults to the featured channel
    #[arg(long)]
    channel: Option<u32>,
}

#[derive(Debug, Args)]
struct PostArgs {
    /// Message text
    content: String,
}

pub(crate) fn run(command: CommunityCommand, out: &mut impl Write) -> Result<(), AppError> {
    let mut feed = ChannelFeed::demo()?;

    match command.command {
        CommunitySubcommand::Show(args) => {
            if let Some(channel) = args.channel
                && !feed.select(channel)
            {
                return Err(AppError::UnknownChannel(channel));
            }

            write_feed(&feed, out)
        }
        CommunitySubcommand::Post(args) => match feed.post(&args.content) {
            Some(message) => write_message(message, out),
            None => {
                writeln!(out, "消息不能为空")?;

                Ok(())
            }
        },
    }
}

fn write_feed(feed: &ChannelFeed, out: &mut impl Write) -> Result<(), AppError> {
    for channel in feed.channels() {
        let marker = match channel.kind {
            ChannelKind::Text => "#",
            ChannelKind::Voice => "🔊",
        };
        let selected = feed.selected().is_some_and(|current| current.id == channel.id);
        let unread = if channel.unread { " •" } else { "" };

        writeln!(
            out,
            "{} {marker} {}{unread}",
            if selected { ">" } else { " " },
            channel.name
        )?;
    }

    writeln!(out)?;

    for message in feed.messages() {
        write_message(message, out)?;
    }

    let online = feed.members().iter().map(|member| member.name.as_str()).collect::<Vec<_>>();

    writeln!(out, "成员: {}", online.join(", "))?;

    Ok(())
}

fn write_message(message: &Message, out: &mut impl Write) -> Result<(), AppError> {
    let bot = if message.bot { " [BOT]" } else { "" };

    writeln!(out, "{}{bot}  {}", message.author, message.timestamp)?;
    writeln!(out, "{}", message.content)?;

    if !message.reactions.is_empty() {
        let reactions = message
            .reactions
            .iter()
            .map(|reaction| format!("{} {}", reaction.emoji, reaction.count))
            .collect::<Vec<_>>();

        writeln!(out, "{}", reactions.join("  "))?;
    }

    writeln!(out)?;

    Ok(())
}
