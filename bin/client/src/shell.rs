//! Line-oriented command shell over the state layer.
//!
//! Stands in for the view tree: each command maps to a user action the
//! browser client would perform (navigation, login form, preference
//! toggles), so the whole state layer is exercisable from a terminal.

use handwave_routing::admit_path;
use handwave_session::User;

use crate::context::AppContext;

const HELP: &str = "\
commands:
  status                      show session and preferences
  login EMAIL PASSWORD        authenticate
  signup NAME EMAIL PASSWORD  register a new account
  guest NAME                  continue as guest
  logout                      end the session
  go PATH                     request navigation to PATH
  theme                       toggle dark/light theme
  accessibility               toggle accessibility mode
  fontsize SIZE               set font size (normal|large|extra-large)
  contrast                    toggle high contrast
  quit                        exit";

/// Executes one command line against the context.
///
/// Returns the text to show the user, or `None` on `quit`.
pub fn execute(ctx: &AppContext, line: &str) -> Option<String> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("");
    let args: Vec<&str> = words.collect();

    let reply = match (command, args.as_slice()) {
        ("", []) => String::new(),
        ("help", _) => HELP.to_string(),
        ("status", _) => status(ctx),
        ("login", [email, password]) => match ctx.session().borrow_mut().login(email, password) {
            Ok(user) => format!("logged in: {}", describe(&user)),
            Err(e) => format!("login failed: {e}"),
        },
        ("signup", [name, email, password]) => {
            let user = ctx
                .session()
                .borrow_mut()
                .signup((*name).to_string(), (*email).to_string(), password);
            format!("signed up: {}", describe(&user))
        }
        ("guest", [name]) => {
            let user = ctx.session().borrow_mut().login_as_guest((*name).to_string());
            format!("joined as guest: {}", describe(&user))
        }
        ("logout", []) => {
            ctx.session().borrow_mut().logout();
            "logged out".to_string()
        }
        ("go", [path]) => {
            let state = ctx.session().borrow().state();
            match admit_path(path, state).redirect_target() {
                None => format!("rendering {path}"),
                Some(target) => format!("redirected to {target}"),
            }
        }
        ("theme", []) => {
            let theme = ctx.prefs().borrow_mut().toggle_theme();
            format!("theme: {theme}")
        }
        ("accessibility", []) => {
            let on = ctx.prefs().borrow_mut().toggle_accessibility();
            format!("accessibility mode: {on}")
        }
        ("fontsize", [size]) => match size.parse() {
            Ok(size) => {
                ctx.prefs().borrow_mut().set_font_size(size);
                format!("font size: {size}")
            }
            Err(e) => format!("usage error: {e}"),
        },
        ("contrast", []) => {
            let on = ctx.prefs().borrow_mut().toggle_high_contrast();
            format!("high contrast: {on}")
        }
        ("quit" | "exit", []) => return None,
        _ => format!("unrecognized command: {line:?} (try \"help\")"),
    };
    Some(reply)
}

fn status(ctx: &AppContext) -> String {
    let session = match ctx.session().borrow().current_user() {
        Some(user) => format!("session: {}", describe(user)),
        None => "session: none".to_string(),
    };
    let prefs = ctx.prefs().borrow().preferences();
    format!(
        "{session}\npreferences: theme={} accessibility={} fontSize={} highContrast={}",
        prefs.theme, prefs.accessibility_mode, prefs.font_size, prefs.high_contrast
    )
}

fn describe(user: &User) -> String {
    let kind = match (user.is_guest(), user.is_admin()) {
        (true, _) => "guest",
        (_, true) => "admin",
        _ => "user",
    };
    format!("{} <{}> ({kind})", user.name(), user.email().unwrap_or("-"))
}
