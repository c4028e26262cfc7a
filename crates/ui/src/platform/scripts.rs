/// Binds a `getUserMedia` video stream to the `<video>` with `video_id`.
///
/// Resolves to `{ ok, name, message }` so the caller can tell a denied
/// permission from a missing device.
pub(super) fn camera_preview_script(video_id: &str) -> String {
    format!(
        r#"const videoId = {video_id:?};
            let video = null;
            for (let attempt = 0; attempt < 100 && !video; attempt++) {{
                video = document.getElementById(videoId);
                if (!video) {{
                    await new Promise((resolve) => setTimeout(resolve, 20));
                }}
            }}
            if (!video) {{
                return {{ ok: false, name: "NotFoundError", message: "video element #" + videoId + " not found" }};
            }}
            if (!navigator.mediaDevices || !navigator.mediaDevices.getUserMedia) {{
                return {{ ok: false, name: "NotSupportedError", message: "media capture is not available" }};
            }}
            try {{
                video.srcObject = await navigator.mediaDevices.getUserMedia({{ video: true }});
                return {{ ok: true, name: null, message: null }};
            }} catch (err) {{
                return {{
                    ok: false,
                    name: err && err.name ? String(err.name) : "Error",
                    message: String(err),
                }};
            }}"#,
        video_id = video_id,
    )
}
