//! Login, registration, and session commands.

use secrecy::SecretString;

use crate::commands::Context;
use crate::error::CliError;

/// Log in and persist the session.
pub async fn login(
    ctx: &mut Context,
    username: &str,
    password: SecretString,
) -> Result<(), CliError> {
    let token = ctx.auth.login(username, &password).await?;
    ctx.manager.store_session(&token, username)?;

    println!("Logged in as {username}");
    Ok(())
}

/// Register a new demo user.
///
/// The demo API accepts the registration but does not create a usable
/// account.
pub async fn register(
    ctx: &Context,
    username: &str,
    email: &str,
    password: SecretString,
) -> Result<(), CliError> {
    ctx.auth.register(username, email, &password).await?;

    println!("Registered {username} - you can now log in");
    Ok(())
}

/// Log out, wiping the session, cart, and favorites.
pub fn logout(ctx: &mut Context) -> Result<(), CliError> {
    if ctx.manager.session().is_none() {
        println!("Not logged in.");
        return Ok(());
    }

    ctx.manager.logout()?;
    println!("Logged out. Cart and favorites were cleared.");
    Ok(())
}

/// Show the logged-in user, if any.
pub fn whoami(ctx: &Context) {
    match ctx.manager.session() {
        Some(session) if !session.username.is_empty() => {
            println!("Logged in as {}", session.username);
        }
        Some(_) => println!("Logged in (username unknown)"),
        None => println!("Not logged in."),
    }
}
