use rocket::{catchers, routes, Build, Rocket};

use crate::config::CatalogConfig;
use crate::routes::{create_album, default_catcher, get_album, list_albums};
use crate::store::AlbumStore;

pub fn build(config: &CatalogConfig, store: AlbumStore) -> Rocket<Build> {
    rocket::custom(config.rocket_config())
        .manage(store)
        .mount("/", routes![list_albums, get_album, create_album])
        .register("/", catchers![default_catcher])
}
