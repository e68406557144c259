//! AWS section of the state tree.

pub mod apigateway;
pub mod mq;
pub mod s3;
pub mod vpc;

#[derive(Clone, Debug, Default)]
pub struct Aws {
    pub s3: s3::S3,
    pub api_gateway: apigateway::ApiGateway,
    pub mq: mq::Mq,
    pub vpc: vpc::Vpc,
}
