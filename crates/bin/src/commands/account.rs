//! Account commands: signup, login, logout, whoami and profile.

use flavorbook::{FlavorBook, SessionUser};

use super::CommandResult;
use crate::cli::{LoginArgs, SignupArgs};
use crate::output::{OutputFormat, print_json};

/// Run the signup command
pub fn signup(book: &mut FlavorBook, args: &SignupArgs, format: OutputFormat) -> CommandResult {
    let user = book
        .session_mut()
        .signup(&args.email, &args.password, &args.name)?;
    print_user(&user, "Signed up", format)
}

/// Run the login command
pub fn login(book: &mut FlavorBook, args: &LoginArgs, format: OutputFormat) -> CommandResult {
    let user = book.session_mut().login(&args.email, &args.password)?;
    print_user(&user, "Logged in", format)
}

/// Run the logout command
pub fn logout(book: &mut FlavorBook, format: OutputFormat) -> CommandResult {
    let was_logged_in = book.session().is_logged_in();
    book.session_mut().logout()?;
    match format {
        OutputFormat::Human if was_logged_in => println!("Logged out."),
        OutputFormat::Human => println!("Not logged in."),
        OutputFormat::Json => print_json(&serde_json::json!({ "loggedOut": was_logged_in }))?,
    }
    Ok(())
}

/// Run the whoami command
pub fn whoami(book: &FlavorBook, format: OutputFormat) -> CommandResult {
    match (book.session().current_user(), format) {
        (Some(user), OutputFormat::Human) => println!("{} <{}>", user.name, user.email),
        (None, OutputFormat::Human) => println!("Not logged in."),
        (user, OutputFormat::Json) => print_json(&user)?,
    }
    Ok(())
}

/// Run the profile command
pub fn profile(book: &FlavorBook, format: OutputFormat) -> CommandResult {
    let profile = book.profile()?;
    match format {
        OutputFormat::Human => {
            let Some(profile) = profile else {
                println!("Not logged in.");
                return Ok(());
            };
            println!("Name:             {}", profile.user.name);
            println!("Email:            {}", profile.user.email);
            if let Some(since) = profile.member_since {
                println!("Member since:     {}", since.format("%B %Y"));
            }
            println!("Recipes created:  {}", profile.recipes_created);
            println!("Favorites:        {}", profile.favorite_count);
        }
        OutputFormat::Json => print_json(&profile)?,
    }
    Ok(())
}

fn print_user(user: &SessionUser, action: &str, format: OutputFormat) -> CommandResult {
    match format {
        OutputFormat::Human => println!("{action} as {} <{}>", user.name, user.email),
        OutputFormat::Json => print_json(user)?,
    }
    Ok(())
}
