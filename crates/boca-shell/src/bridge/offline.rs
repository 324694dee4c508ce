/// Shown in place of the site while there is no connectivity. Loads nothing
/// external; the Retry button asks the shell to re-check.
pub const OFFLINE_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Offline</title>
    <style>
      body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        height: 100vh;
        margin: 0;
        padding: 20px;
        box-sizing: border-box;
        text-align: center;
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        color: white;
      }
      .icon { font-size: 80px; margin-bottom: 20px; }
      h1 { font-size: 24px; margin-bottom: 10px; }
      p { font-size: 16px; opacity: 0.9; margin-bottom: 30px; }
      button {
        background: white;
        color: #667eea;
        border: none;
        padding: 15px 30px;
        border-radius: 25px;
        font-size: 16px;
        font-weight: bold;
        cursor: pointer;
      }
    </style>
  </head>
  <body>
    <div class="icon">&#x1F4E1;</div>
    <h1>You're Offline</h1>
    <p>Please check your internet connection and try again.</p>
    <button id="retry">Retry</button>
    <script>
      document.getElementById('retry').addEventListener('click', function() {
        window.ipc.postMessage(JSON.stringify({ type: 'retry' }));
      });
    </script>
  </body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::OFFLINE_HTML;

    #[test]
    fn offline_document_is_self_contained() {
        assert!(!OFFLINE_HTML.contains("src="));
        assert!(!OFFLINE_HTML.contains("href="));
        assert!(!OFFLINE_HTML.contains("@import"));
    }

    #[test]
    fn retry_posts_message() {
        assert!(OFFLINE_HTML.contains("You're Offline"));
        assert!(OFFLINE_HTML.contains("type: 'retry'"));
    }
}
