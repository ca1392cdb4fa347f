// Message and service definitions for `proto/roster.proto`, in the shape
// `tonic-build` produces for it.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Player {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub number: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub position: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub height: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub weight: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub age: ::prost::alloc::string::String,
    #[prost(int32, tag = "8")]
    pub experience: i32,
    #[prost(string, tag = "9")]
    pub college: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListPlayersRequest {
    #[prost(string, tag = "1")]
    pub position: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListPlayersResponse {
    #[prost(message, repeated, tag = "1")]
    pub players: ::prost::alloc::vec::Vec<Player>,
    #[prost(string, tag = "2")]
    pub err: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetPlayerRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPlayerResponse {
    #[prost(message, optional, tag = "1")]
    pub player: ::core::option::Option<Player>,
    #[prost(string, tag = "2")]
    pub err: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SavePlayerRequest {
    #[prost(message, optional, tag = "1")]
    pub player: ::core::option::Option<Player>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SavePlayerResponse {
    #[prost(message, optional, tag = "1")]
    pub player: ::core::option::Option<Player>,
    #[prost(bool, tag = "2")]
    pub created: bool,
    #[prost(string, tag = "3")]
    pub err: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DeletePlayerRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeletePlayerResponse {
    #[prost(string, tag = "1")]
    pub err: ::prost::alloc::string::String,
}

pub const SERVICE_NAME: &str = "roster.v1.Players";

/// Generated client implementations.
pub mod players_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct PlayersClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl PlayersClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> PlayersClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }

        pub async fn list_players(
            &mut self,
            request: impl tonic::IntoRequest<super::ListPlayersRequest>,
        ) -> std::result::Result<tonic::Response<super::ListPlayersResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/roster.v1.Players/ListPlayers");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(tonic::GrpcMethod::new(super::SERVICE_NAME, "ListPlayers"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn get_player(
            &mut self,
            request: impl tonic::IntoRequest<super::GetPlayerRequest>,
        ) -> std::result::Result<tonic::Response<super::GetPlayerResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/roster.v1.Players/GetPlayer");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(tonic::GrpcMethod::new(super::SERVICE_NAME, "GetPlayer"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn save_player(
            &mut self,
            request: impl tonic::IntoRequest<super::SavePlayerRequest>,
        ) -> std::result::Result<tonic::Response<super::SavePlayerResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/roster.v1.Players/SavePlayer");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(tonic::GrpcMethod::new(super::SERVICE_NAME, "SavePlayer"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn delete_player(
            &mut self,
            request: impl tonic::IntoRequest<super::DeletePlayerRequest>,
        ) -> std::result::Result<tonic::Response<super::DeletePlayerResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/roster.v1.Players/DeletePlayer");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(tonic::GrpcMethod::new(super::SERVICE_NAME, "DeletePlayer"));
            self.inner.unary(req, path, codec).await
        }
    }
}

/// Generated server implementations.
pub mod players_server {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;

    /// Generated trait containing gRPC methods that should be implemented for use with PlayersServer.
    #[async_trait]
    pub trait Players: std::marker::Send + std::marker::Sync + 'static {
        async fn list_players(
            &self,
            request: tonic::Request<super::ListPlayersRequest>,
        ) -> std::result::Result<tonic::Response<super::ListPlayersResponse>, tonic::Status>;
        async fn get_player(
            &self,
            request: tonic::Request<super::GetPlayerRequest>,
        ) -> std::result::Result<tonic::Response<super::GetPlayerResponse>, tonic::Status>;
        async fn save_player(
            &self,
            request: tonic::Request<super::SavePlayerRequest>,
        ) -> std::result::Result<tonic::Response<super::SavePlayerResponse>, tonic::Status>;
        async fn delete_player(
            &self,
            request: tonic::Request<super::DeletePlayerRequest>,
        ) -> std::result::Result<tonic::Response<super::DeletePlayerResponse>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct PlayersServer<T> {
        inner: Arc<T>,
    }

    impl<T> PlayersServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }

        pub fn from_arc(inner: Arc<T>) -> Self {
            Self { inner }
        }

        pub fn with_interceptor<F>(inner: T, interceptor: F) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
    }

    impl<T, B> tonic::codegen::Service<http::Request<B>> for PlayersServer<T>
    where
        T: Players,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/roster.v1.Players/ListPlayers" => {
                    #[allow(non_camel_case_types)]
                    struct ListPlayersSvc<T: Players>(pub Arc<T>);
                    impl<T: Players> tonic::server::UnaryService<super::ListPlayersRequest> for ListPlayersSvc<T> {
                        type Response = super::ListPlayersResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ListPlayersRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move { <T as Players>::list_players(&inner, request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ListPlayersSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/roster.v1.Players/GetPlayer" => {
                    #[allow(non_camel_case_types)]
                    struct GetPlayerSvc<T: Players>(pub Arc<T>);
                    impl<T: Players> tonic::server::UnaryService<super::GetPlayerRequest> for GetPlayerSvc<T> {
                        type Response = super::GetPlayerResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetPlayerRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move { <T as Players>::get_player(&inner, request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetPlayerSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/roster.v1.Players/SavePlayer" => {
                    #[allow(non_camel_case_types)]
                    struct SavePlayerSvc<T: Players>(pub Arc<T>);
                    impl<T: Players> tonic::server::UnaryService<super::SavePlayerRequest> for SavePlayerSvc<T> {
                        type Response = super::SavePlayerResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SavePlayerRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move { <T as Players>::save_player(&inner, request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SavePlayerSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/roster.v1.Players/DeletePlayer" => {
                    #[allow(non_camel_case_types)]
                    struct DeletePlayerSvc<T: Players>(pub Arc<T>);
                    impl<T: Players> tonic::server::UnaryService<super::DeletePlayerRequest> for DeletePlayerSvc<T> {
                        type Response = super::DeletePlayerResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeletePlayerRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move { <T as Players>::delete_player(&inner, request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = DeletePlayerSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    let mut response = http::Response::new(empty_body());
                    let headers = response.headers_mut();
                    headers.insert(
                        tonic::Status::GRPC_STATUS,
                        (tonic::Code::Unimplemented as i32).into(),
                    );
                    headers.insert(
                        http::header::CONTENT_TYPE,
                        tonic::metadata::GRPC_CONTENT_TYPE,
                    );
                    Ok(response)
                }),
            }
        }
    }

    impl<T> Clone for PlayersServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }

    impl<T> tonic::server::NamedService for PlayersServer<T> {
        const NAME: &'static str = super::SERVICE_NAME;
    }
}
