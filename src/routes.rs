use rocket::http::Status;
use rocket::response::status::{BadRequest, Created, Custom, NotFound};
use rocket::serde::json::{self, Json};
use rocket::{catch, get, post, uri, Request, State};

use crate::models::album::Album;
use crate::responses::{IndentedJson, Message};
use crate::store::AlbumStore;

pub const ALBUM_NOT_FOUND: &str = "album not found";

#[get("/albums")]
pub fn list_albums(store: &State<AlbumStore>) -> IndentedJson<Vec<Album>> {
    IndentedJson(store.list())
}

#[get("/albums/<id>")]
pub fn get_album(
    store: &State<AlbumStore>,
    id: &str,
) -> Result<IndentedJson<Album>, NotFound<IndentedJson<Message>>> {
    store.get(id).map(IndentedJson).ok_or_else(|| {
        tracing::debug!("No album with id {:?}", id);
        NotFound(IndentedJson(Message::new(ALBUM_NOT_FOUND)))
    })
}

#[post("/albums", data = "<album>")]
pub fn create_album(
    store: &State<AlbumStore>,
    album: Result<Json<Album>, json::Error<'_>>,
) -> Result<Created<IndentedJson<Album>>, BadRequest<IndentedJson<Message>>> {
    let album = match album {
        Ok(Json(album)) => album,
        Err(err) => {
            tracing::warn!("Rejected album body: {}", err);
            return Err(BadRequest(IndentedJson(Message::new(format!(
                "invalid album: {}",
                err
            )))));
        }
    };

    let location = uri!(get_album(album.id.as_str())).to_string();
    let size = store.append(album.clone());
    tracing::info!(
        "Created album {:?} ({} by {}), catalog size {}",
        album.id,
        album.title,
        album.artist,
        size
    );

    Ok(Created::new(location).body(IndentedJson(album)))
}

#[catch(default)]
pub fn default_catcher(status: Status, request: &Request<'_>) -> Custom<IndentedJson<Message>> {
    tracing::debug!("{} {} -> {}", request.method(), request.uri(), status);
    let reason = status.reason().unwrap_or("unknown error");
    Custom(status, IndentedJson(Message::new(reason.to_lowercase())))
}
