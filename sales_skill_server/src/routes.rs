//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Since each worker thread processes its requests sequentially, handlers must never block. The Alexa handler awaits
//! the Shopify calls, so other requests are served while it waits.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use sales_engine::{OrderDataSource, SalesReportApi, SkillRequest};

use crate::{
    data_objects::{AlexaRequest, AlexaResponse},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// ----------------------------------------------   Alexa  ----------------------------------------------------
route!(alexa => Post "/alexa" impl OrderDataSource);
/// Route handler for the Alexa skill endpoint
///
/// Every well-formed envelope gets exactly one spoken answer, and the session always ends. Shopify being unreachable
/// doesn't change that: the answer is composed from whatever could be fetched. Only a body that isn't an Alexa
/// envelope at all is rejected.
pub async fn alexa<B: OrderDataSource>(
    body: web::Json<AlexaRequest>,
    api: web::Data<SalesReportApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let envelope = body.into_inner();
    trace!("💻️ Received Alexa request {:?}", envelope.request.request_id);
    let request = SkillRequest::from(&envelope);
    let response = api.respond(&request).await;
    Ok(HttpResponse::Ok().json(AlexaResponse::from(response)))
}

/// Malformed JSON bodies are reported in the same shape as every other server error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("💻️ Could not read Alexa envelope. {err}");
        ServerError::CouldNotDeserializePayload(err.to_string()).into()
    })
}
