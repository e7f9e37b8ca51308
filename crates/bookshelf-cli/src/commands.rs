//! The command table, dispatcher, and per-operation handlers.
//!
//! Dispatch is an exact-string lookup against [`COMMANDS`], an immutable
//! table built once at process start. The dispatcher does no argument
//! validation; each handler checks its own fixed arity and field formats
//! before it touches the network, so a bad invocation never dials the
//! service.

use std::future::Future;
use std::pin::Pin;

use anyhow::{bail, Context, Result};

use bookshelf_client::{BookshelfClient, CallContext};
use bookshelf_common::protocol::Book;

use crate::output;

/// Remote endpoint selection, handed to every handler.
#[derive(Debug, Clone)]
pub struct Config {
    /// `host:port` of the catalog service
    pub address: String,
}

pub type CommandFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// Stored handler value: one uniform signature for the five operations.
type CommandFn = for<'a> fn(&'a Config, &'a CallContext, &'a [String]) -> CommandFuture<'a>;

/// One entry of the command table.
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    run: CommandFn,
}

impl Command {
    /// Invokes the handler with the call context and the raw argument
    /// slice (everything after the command word, verbatim).
    pub fn invoke<'a>(
        &self,
        config: &'a Config,
        ctx: &'a CallContext,
        args: &'a [String],
    ) -> CommandFuture<'a> {
        (self.run)(config, ctx, args)
    }
}

/// The command table. Constructed once, never mutated.
pub static COMMANDS: &[Command] = &[
    Command {
        name: "get",
        description: "Retrieves the indicated book",
        usage: "bookshelf get <id>",
        run: get_cmd,
    },
    Command {
        name: "list",
        description: "Lists all books",
        usage: "bookshelf list",
        run: list_cmd,
    },
    Command {
        name: "insert",
        description: "Inserts the provided book",
        usage: "bookshelf insert <id> <title> <author>",
        run: insert_cmd,
    },
    Command {
        name: "delete",
        description: "Deletes the indicated book",
        usage: "bookshelf delete <id>",
        run: delete_cmd,
    },
    Command {
        name: "watch",
        description: "Watches for inserted books",
        usage: "bookshelf watch",
        run: watch_cmd,
    },
];

/// Exact-string lookup against the table.
pub fn find(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// The full usage block: one line per command.
pub fn usage_block() -> String {
    let mut text = String::from(
        "bookshelf is a command-line client for the bookshelf catalog service\n\nUsage:\n",
    );
    for command in COMMANDS {
        text.push_str(&format!("  {:<42} {}\n", command.usage, command.description));
    }
    text
}

/// Routes the argument vector to a handler.
///
/// The first token is the command name, the rest are its arguments. On a
/// lookup miss (or an empty vector) the full usage block goes to stdout
/// and the invocation fails without executing anything.
pub async fn dispatch(config: &Config, ctx: &CallContext, argv: &[String]) -> Result<()> {
    let Some((name, rest)) = argv.split_first() else {
        print!("{}", usage_block());
        bail!("no command given");
    };

    match find(name) {
        Some(command) => {
            tracing::debug!(command = command.name, args = rest.len(), "dispatching");
            command.invoke(config, ctx, rest).await
        }
        None => {
            print!("{}", usage_block());
            bail!("unknown command: {}", name)
        }
    }
}

fn get_cmd<'a>(config: &'a Config, ctx: &'a CallContext, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(do_get(config, ctx, args))
}

fn list_cmd<'a>(config: &'a Config, ctx: &'a CallContext, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(do_list(config, ctx, args))
}

fn insert_cmd<'a>(
    config: &'a Config,
    ctx: &'a CallContext,
    args: &'a [String],
) -> CommandFuture<'a> {
    Box::pin(do_insert(config, ctx, args))
}

fn delete_cmd<'a>(
    config: &'a Config,
    ctx: &'a CallContext,
    args: &'a [String],
) -> CommandFuture<'a> {
    Box::pin(do_delete(config, ctx, args))
}

fn watch_cmd<'a>(config: &'a Config, ctx: &'a CallContext, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(do_watch(config, ctx, args))
}

/// Parses a book id as a base-10 integer, naming the offending literal on
/// failure.
fn parse_book_id(raw: &str) -> Result<i32> {
    raw.parse::<i32>()
        .with_context(|| format!("provided id '{}' invalid", raw))
}

async fn connect(config: &Config) -> Result<BookshelfClient> {
    BookshelfClient::connect(&config.address)
        .await
        .with_context(|| format!("did not connect to {}", config.address))
}

async fn do_get(config: &Config, ctx: &CallContext, args: &[String]) -> Result<()> {
    if args.len() != 1 {
        bail!("usage: bookshelf get <id>");
    }
    let id = parse_book_id(&args[0])?;

    let mut client = connect(config).await?;
    let book = client
        .get(ctx, id)
        .await
        .with_context(|| format!("get book ({})", id))?;

    println!("Server response:");
    output::print_json(&book)
}

async fn do_list(config: &Config, ctx: &CallContext, args: &[String]) -> Result<()> {
    if !args.is_empty() {
        bail!("usage: bookshelf list");
    }

    let mut client = connect(config).await?;
    let list = client.list(ctx).await.context("list books")?;

    println!("Server sent {} book(s).", list.len());
    output::print_json(&list)
}

async fn do_insert(config: &Config, ctx: &CallContext, args: &[String]) -> Result<()> {
    if args.len() != 3 {
        bail!("usage: bookshelf insert <id> <title> <author>");
    }
    let id = parse_book_id(&args[0])?;
    let book = Book::new(id, args[1].clone(), args[2].clone());

    let mut client = connect(config).await?;
    let created = client
        .insert(ctx, book.clone())
        .await
        .with_context(|| format!("insert book ({:?})", book))?;

    println!("Server response:");
    output::print_json(&created)
}

async fn do_delete(config: &Config, ctx: &CallContext, args: &[String]) -> Result<()> {
    if args.len() != 1 {
        bail!("usage: bookshelf delete <id>");
    }
    let id = parse_book_id(&args[0])?;

    let mut client = connect(config).await?;
    let ack = client
        .delete(ctx, id)
        .await
        .with_context(|| format!("delete book ({})", id))?;

    println!("Server response:");
    output::print_json(&ack)
}

async fn do_watch(config: &Config, ctx: &CallContext, args: &[String]) -> Result<()> {
    if !args.is_empty() {
        bail!("usage: bookshelf watch");
    }

    let client = connect(config).await?;
    let mut stream = client.watch(ctx).await.context("watch books")?;

    // Each record is rendered the moment it arrives; the stream is
    // unbounded and never buffered.
    while let Some(book) = stream.next().await.context("watch books stream")? {
        println!("Server stream data received:");
        output::print_json(&book)?;
    }
    Ok(())
}
