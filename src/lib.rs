pub mod configuration;

pub mod intensity {
    pub mod scalar;
    pub mod breakpoint;
    pub mod breakpointstore;
    pub mod canonicalizer;
    pub mod intensityerror;
    pub mod intensitysegments;
}

pub mod logging;

pub mod script {
    pub mod scripterror;
    pub mod operation;
    pub mod operationscript;
}
