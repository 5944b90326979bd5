/// 将后端返回的媒体路径拼成完整 URL
///
/// 已经是 `http` 开头的地址原样返回；空路径返回 `None`
pub fn resolve_media_url(storage_base_url: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http") {
        return Some(path.to_string());
    }
    let base = storage_base_url.trim_end_matches('/');
    let relative = path.trim_start_matches('/');
    Some(format!("{}/{}", base, relative))
}
