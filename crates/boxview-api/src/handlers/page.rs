//! The upload-and-detect page.
//!
//! A single embedded HTML page: file input restricted to jpg/jpeg/png, an
//! upload preview, a detect button that only appears once an image is
//! chosen, the annotated result, and an inline error banner fed by the
//! `detail` field of error responses.

use axum::response::Html;

/// Serve the single-page UI.
pub async fn index() -> Html<&'static str> {
    Html(PAGE)
}

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>🔍 YOLOv8n Object Detection</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: #f5f5f5;
            min-height: 100vh;
            display: flex;
            align-items: flex-start;
            justify-content: center;
            padding: 2rem;
        }

        .container {
            background: #ffffff;
            border-radius: 10px;
            box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
            max-width: 760px;
            width: 100%;
            padding: 2rem;
            text-align: center;
        }

        h1 {
            color: #333;
            margin-bottom: 10px;
        }

        .subtitle {
            color: #666;
            margin-bottom: 30px;
        }

        .upload-area {
            border: 2px dashed #4CAF50;
            border-radius: 8px;
            padding: 40px 20px;
            cursor: pointer;
            background: #fafffa;
        }

        .upload-area:hover {
            background: #f0fff0;
        }

        button {
            background-color: #4CAF50;
            color: white;
            padding: 10px 24px;
            font-size: 16px;
            margin: 16px 2px 4px;
            cursor: pointer;
            border: none;
            border-radius: 8px;
            display: none;
        }

        button:hover {
            background-color: #45a049;
        }

        img.result {
            border: 2px solid #4CAF50;
            border-radius: 8px;
            max-width: 100%;
            margin-top: 16px;
            display: none;
        }

        .caption {
            color: #666;
            font-size: 0.9em;
            margin-top: 4px;
            display: none;
        }

        .banner {
            background: #fdecea;
            color: #b71c1c;
            border: 1px solid #f5c6cb;
            border-radius: 8px;
            padding: 12px;
            margin-top: 16px;
            display: none;
            text-align: left;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>🔍 YOLOv8n Object Detection</h1>
        <p class="subtitle">
            Upload an image and let the YOLOv8n model detect objects in it.
            This model can identify a variety of objects and draw bounding boxes around them.
        </p>

        <div class="upload-area" id="upload-area">
            Choose an image... (jpg, jpeg, png)
            <input type="file" id="file-input" accept=".jpg,.jpeg,.png" hidden>
        </div>

        <img class="result" id="preview">
        <p class="caption" id="preview-caption">Uploaded Image</p>

        <button id="detect-btn">🔍 Detect Objects</button>

        <img class="result" id="result">
        <p class="caption" id="result-caption">Detected Objects</p>

        <div class="banner" id="error-banner"></div>
    </div>

    <script>
        const fileInput = document.getElementById('file-input');
        const uploadArea = document.getElementById('upload-area');
        const preview = document.getElementById('preview');
        const previewCaption = document.getElementById('preview-caption');
        const detectBtn = document.getElementById('detect-btn');
        const result = document.getElementById('result');
        const resultCaption = document.getElementById('result-caption');
        const banner = document.getElementById('error-banner');

        uploadArea.addEventListener('click', () => fileInput.click());

        fileInput.addEventListener('change', () => {
            const file = fileInput.files[0];
            if (!file) return;

            const reader = new FileReader();
            reader.onload = (e) => {
                preview.src = e.target.result;
                preview.style.display = 'inline';
                previewCaption.style.display = 'block';
                detectBtn.style.display = 'inline-block';
            };
            reader.readAsDataURL(file);

            result.style.display = 'none';
            resultCaption.style.display = 'none';
            banner.style.display = 'none';
        });

        detectBtn.addEventListener('click', async () => {
            const file = fileInput.files[0];
            if (!file) return;

            banner.style.display = 'none';
            result.style.display = 'none';
            resultCaption.style.display = 'none';

            const form = new FormData();
            form.append('file', file);

            try {
                const response = await fetch('/api/detect', {
                    method: 'POST',
                    body: form,
                });
                const payload = await response.json();

                if (!response.ok) {
                    banner.textContent = payload.detail || 'Request failed';
                    banner.style.display = 'block';
                    return;
                }

                result.src = 'data:image/jpeg;base64,' + payload.image;
                result.style.display = 'inline';
                resultCaption.style.display = 'block';
            } catch (err) {
                banner.textContent = 'Exception when calling model->predict: ' + err;
                banner.style.display = 'block';
            }
        });
    </script>
</body>
</html>
"#;
