//! Shared page layout: document shell, navigation, flash banner

use super::esc;

/// Wrap a body fragment in the site chrome
pub fn page(title: &str, flash: Option<&str>, body: &str) -> String {
    let flash_banner = match flash {
        Some(message) => format!(r#"<div class="flash">{}</div>"#, esc(message)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
            margin: 0;
        }}
        header {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 12px 20px;
        }}
        header a {{
            color: #e0e0e0;
            margin-right: 16px;
            text-decoration: none;
        }}
        header a:hover {{ text-decoration: underline; }}
        main {{ padding: 20px; max-width: 900px; }}
        a {{ color: #8ab4f8; }}
        .flash {{
            background-color: #2d4a2d;
            border: 1px solid #4a7a4a;
            border-radius: 4px;
            padding: 10px 14px;
            margin-bottom: 16px;
        }}
        .card {{
            background-color: #2a2a2a;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
            padding: 12px 16px;
            margin-bottom: 12px;
        }}
        label {{ display: block; margin-top: 10px; }}
        input[type=text], input[type=datetime-local], select, textarea {{
            width: 100%;
            max-width: 420px;
            padding: 6px;
            background-color: #1f1f1f;
            color: #e0e0e0;
            border: 1px solid #3a3a3a;
        }}
        .checkbox-group label {{ display: inline-block; margin-right: 12px; }}
        button {{
            margin-top: 14px;
            padding: 8px 18px;
            background-color: #3a5a8a;
            color: #fff;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }}
    </style>
</head>
<body>
    <header>
        <a href="/">Gigboard</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <a href="/venues/create">Add Venue</a>
        <a href="/artists/create">Add Artist</a>
        <a href="/shows/create">Book Show</a>
    </header>
    <main>
        {flash_banner}
        {body}
    </main>
</body>
</html>
"#,
        title = esc(title),
        flash_banner = flash_banner,
        body = body,
    )
}

/// Search box posting to the given endpoint
pub fn search_form(action: &str, placeholder: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
            <input type="text" name="search_term" placeholder="{placeholder}">
            <button type="submit">Search</button>
        </form>"#,
        action = action,
        placeholder = esc(placeholder),
    )
}
